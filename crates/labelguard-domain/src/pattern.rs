use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A compiled label value pattern.
///
/// The source text is the one the compiled regex was built from (`Regex::as_str`).
///
/// Reads from and writes to settings documents as the plain pattern string. Matching is an
/// unanchored search: `team-` matches `my-team-a`, use `^team-` to pin the prefix.
#[derive(Clone, Debug)]
pub struct LabelPattern {
    regex: Regex,
}

impl LabelPattern {
    /// Compile `source`; the error carries the regex engine's diagnostic unchanged.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for LabelPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for LabelPattern {}

impl fmt::Display for LabelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelPattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelPattern::new(s)
    }
}

impl Serialize for LabelPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LabelPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        LabelPattern::new(&source).map_err(D::Error::custom)
    }
}
