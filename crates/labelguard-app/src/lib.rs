//! Use case orchestration for labelguard.
//!
//! This crate provides the application layer: the entry points a policy host calls with raw
//! payloads. It checks document well-formedness, extracts settings and labels, and delegates
//! the actual decisions to the settings and domain crates.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod protocol;
mod settings;
mod validate;

pub use protocol::{protocol_version, serialize_response};
pub use settings::validate_settings;
pub use validate::{extract_labels, validate, validate_document};
