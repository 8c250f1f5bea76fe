//! Stable DTOs and message constants used across the labelguard workspace.
//!
//! This crate is intentionally boring:
//! - accept/reject envelopes exchanged with the policy host
//! - fixed message prefixes callers test against
//! - well-known document paths

#![forbid(unsafe_code)]

pub mod ids;
pub mod response;

pub use response::{
    ProtocolVersion, ProtocolVersionResponse, SettingsValidationResponse, ValidationResponse,
};
