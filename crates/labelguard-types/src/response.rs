use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one admission request.
///
/// `code` is only set when the request itself was unusable (malformed document or invalid
/// embedded settings). Ordinary label violations carry a message and no code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResponse {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ValidationResponse {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            message: None,
            code: None,
        }
    }

    pub fn reject(message: impl Into<String>, code: Option<u16>) -> Self {
        Self {
            accepted: false,
            message: Some(message.into()),
            code,
        }
    }
}

/// Outcome of a standalone settings check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SettingsValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SettingsValidationResponse {
    pub fn accept() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn reject(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Revision of the host calling protocol spoken by the entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVersion {
    V1,
}

/// The protocol version callback answers with a bare JSON string (`"v1"`).
pub type ProtocolVersionResponse = ProtocolVersion;
