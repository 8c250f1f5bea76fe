//! Settings parsing and validation.
//!
//! This crate is intentionally IO-free: it parses settings documents provided as bytes or
//! already-parsed JSON and turns them into a validated [`LabelPolicy`].

#![forbid(unsafe_code)]

mod error;
mod model;
mod resolve;

use labelguard_domain::LabelPolicy;
use labelguard_types::ids;
use serde::Deserialize;
use serde_json::Value;

pub use error::SettingsError;
pub use model::SettingsDocumentV1;
pub use resolve::{compile_settings, validate_policy};

/// Where the settings live inside the incoming document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsLocation {
    /// The document *is* the settings (standalone settings check).
    Root,
    /// The settings sit under the `settings` key of a validation request.
    Nested,
}

impl SettingsLocation {
    fn pointer(self) -> &'static str {
        match self {
            SettingsLocation::Root => "",
            SettingsLocation::Nested => ids::PATH_SETTINGS,
        }
    }
}

/// Extract the raw settings document at `location`.
///
/// A missing or `null` value at the location yields empty settings.
pub fn parse_settings_document(
    document: &Value,
    location: SettingsLocation,
) -> Result<SettingsDocumentV1, SettingsError> {
    match document.pointer(location.pointer()) {
        None | Some(Value::Null) => Ok(SettingsDocumentV1::default()),
        Some(value) => Ok(SettingsDocumentV1::deserialize(value)?),
    }
}

/// Parse settings at `location` and compile their patterns, without consistency checks.
pub fn parse_settings(
    document: &Value,
    location: SettingsLocation,
) -> Result<LabelPolicy, SettingsError> {
    let raw = parse_settings_document(document, location)?;
    let policy = compile_settings(raw)?;
    tracing::debug!(
        denied = policy.denied_labels.len(),
        mandatory = policy.mandatory_labels.len(),
        constrained = policy.constrained_labels.len(),
        "parsed settings"
    );
    Ok(policy)
}

/// Parse a JSON document of any nesting depth.
///
/// Only syntax errors fail; deep nesting grows the stack on the heap instead of hitting
/// serde_json's recursion limit.
pub fn parse_json(input: &[u8]) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Parse raw bytes as JSON, then [`parse_settings`].
pub fn parse_settings_json(
    input: &[u8],
    location: SettingsLocation,
) -> Result<LabelPolicy, SettingsError> {
    let document = parse_json(input)?;
    parse_settings(&document, location)
}

/// Parse and validate in one step: the policy returned is ready for evaluation.
pub fn load_policy(
    document: &Value,
    location: SettingsLocation,
) -> Result<LabelPolicy, SettingsError> {
    let policy = parse_settings(document, location)?;
    validate_policy(&policy)?;
    Ok(policy)
}
