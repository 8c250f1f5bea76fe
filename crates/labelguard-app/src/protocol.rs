use anyhow::Context;
use labelguard_types::{ProtocolVersion, ProtocolVersionResponse};
use serde::Serialize;

/// The host protocol revision the entry points implement.
pub fn protocol_version() -> ProtocolVersionResponse {
    ProtocolVersion::V1
}

/// Serialize any response envelope into the JSON bytes handed back to the host.
pub fn serialize_response<T: Serialize>(response: &T) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec(response).context("serialize response")
}
