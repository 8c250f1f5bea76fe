use labelguard_types::ids;
use thiserror::Error;

/// Why a settings document could not become a usable policy.
///
/// The `Display` text is what callers see after `"Provided settings are not valid: "`.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The document (or the settings inside it) does not have the settings shape.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    /// A constrained label pattern failed to compile.
    #[error("invalid pattern for constrained label {label}: {source}")]
    InvalidPattern {
        label: String,
        source: regex::Error,
    },

    /// The rule sets contradict each other; one message per conflict kind.
    #[error("{}", .0.join(ids::SETTINGS_ERROR_SEPARATOR))]
    Conflicting(Vec<String>),
}
