//! The `validate_settings` use case: let an administrator check settings before rollout.

use labelguard_settings::{SettingsError, SettingsLocation};
use labelguard_types::{SettingsValidationResponse, ids};

/// Validate a standalone settings document.
pub fn validate_settings(payload: &[u8]) -> SettingsValidationResponse {
    match check(payload) {
        Ok(()) => SettingsValidationResponse::accept(),
        Err(err) => {
            tracing::warn!(error = %err, "settings rejected");
            SettingsValidationResponse::reject(format!("{}{}", ids::MSG_SETTINGS_NOT_VALID, err))
        }
    }
}

fn check(payload: &[u8]) -> Result<(), SettingsError> {
    let document = labelguard_settings::parse_json(payload)?;
    labelguard_settings::load_policy(&document, SettingsLocation::Root).map(drop)
}
