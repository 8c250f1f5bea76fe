//! The `validate` use case: evaluate one admission request against its embedded settings.

use labelguard_domain::LabelMap;
use labelguard_settings::SettingsLocation;
use labelguard_types::{ValidationResponse, ids};
use serde_json::Value;

/// Validate a raw validation request payload.
///
/// Rejects with status 400 when the payload is not JSON or its embedded settings are
/// unusable; otherwise accepts or rejects based on the resource labels alone.
pub fn validate(payload: &[u8]) -> ValidationResponse {
    let document = match labelguard_settings::parse_json(payload) {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!(error = %err, "validation request is not a JSON document");
            return ValidationResponse::reject(ids::MSG_NOT_VALID_JSON, Some(ids::STATUS_BAD_REQUEST));
        }
    };

    validate_document(&document)
}

/// Same as [`validate`], for a request that is already parsed.
pub fn validate_document(document: &Value) -> ValidationResponse {
    let policy = match labelguard_settings::load_policy(document, SettingsLocation::Nested) {
        Ok(policy) => policy,
        Err(err) => {
            tracing::warn!(error = %err, "embedded settings rejected");
            return ValidationResponse::reject(err.to_string(), Some(ids::STATUS_BAD_REQUEST));
        }
    };

    let labels = extract_labels(document);
    let decision = labelguard_domain::evaluate(&policy, &labels);

    match decision.message() {
        None => ValidationResponse::accept(),
        Some(message) => {
            tracing::debug!(%message, "request rejected");
            ValidationResponse::reject(message, None)
        }
    }
}

/// Labels of the object under review; absent or non-object labels count as no labels.
pub fn extract_labels(document: &Value) -> LabelMap {
    document
        .pointer(ids::PATH_LABELS)
        .map(LabelMap::from_json)
        .unwrap_or_default()
}
