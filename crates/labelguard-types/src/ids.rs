//! Stable message texts, status codes, and document paths.
//!
//! Message prefixes are part of the external contract: callers compare rejection messages
//! byte for byte, so these must never change.

// Request evaluation
pub const MSG_DENIED_LABELS: &str = "The following labels are denied: ";
pub const MSG_CONSTRAINED_LABELS: &str = "The following labels are violating user constraints: ";
pub const MSG_MISSING_MANDATORY_LABELS: &str = "The following mandatory labels are missing: ";

/// Separator between violation categories in a rejection message.
pub const VIOLATION_SEPARATOR: &str = ". ";
/// Separator between label keys within one category.
pub const LABEL_SEPARATOR: &str = ",";

// Settings consistency
pub const MSG_CONSTRAINED_AND_DENIED: &str =
    "These labels cannot be constrained and denied at the same time: ";
pub const MSG_MANDATORY_AND_DENIED: &str =
    "These labels cannot be mandatory and denied at the same time: ";
pub const SETTINGS_ERROR_SEPARATOR: &str = "; ";

// Tool-level
pub const MSG_NOT_VALID_JSON: &str = "Not a valid JSON document";
pub const MSG_SETTINGS_NOT_VALID: &str = "Provided settings are not valid: ";

/// Status code attached to rejections caused by malformed input.
pub const STATUS_BAD_REQUEST: u16 = 400;

// Document paths (JSON pointer syntax)
pub const PATH_SETTINGS: &str = "/settings";
pub const PATH_LABELS: &str = "/request/object/metadata/labels";
