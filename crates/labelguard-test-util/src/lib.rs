//! Shared test utilities for the labelguard workspace.
//!
//! This crate exists because both the app unit tests and the CLI/xtask integration tests need
//! to assemble validation requests from the fixtures under `tests/fixtures/`, so a
//! `#[cfg(test)]` module inside one crate would not suffice.

use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Root of the shared fixtures (`<repo>/tests/fixtures`).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("labelguard-test-util should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Read an admission request fixture from `tests/fixtures/requests/`.
pub fn read_request_fixture(name: &str) -> Value {
    let path = fixtures_dir().join("requests").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("read request fixture {}: {err}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("parse request fixture {}: {err}", path.display()))
}

/// Read a raw settings payload from `tests/fixtures/settings/`.
pub fn read_settings_fixture(name: &str) -> Vec<u8> {
    let path = fixtures_dir().join("settings").join(name);
    std::fs::read(&path)
        .unwrap_or_else(|err| panic!("read settings fixture {}: {err}", path.display()))
}

/// Build a settings document from rule lists.
pub fn settings(denied: &[&str], mandatory: &[&str], constrained: &[(&str, &str)]) -> Value {
    let constrained: Map<String, Value> = constrained
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    json!({
        "denied_labels": denied,
        "mandatory_labels": mandatory,
        "constrained_labels": constrained,
    })
}

/// Wrap an admission request and settings into the document the host sends to `validate`.
pub fn validation_request(request: Value, settings: Value) -> Value {
    json!({
        "request": request,
        "settings": settings,
    })
}

/// Validation request built from a request fixture plus settings.
pub fn validation_request_from_fixture(name: &str, settings: Value) -> Value {
    validation_request(read_request_fixture(name), settings)
}
