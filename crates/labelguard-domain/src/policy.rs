use crate::pattern::LabelPattern;
use std::collections::{BTreeMap, BTreeSet};

/// The rule sets applied to every resource.
///
/// Keys are compared by exact string equality. A policy handed to [`crate::evaluate`] is
/// expected to have passed settings validation: no key is both denied and constrained, and
/// no key is both denied and mandatory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelPolicy {
    /// Labels whose presence is a violation, whatever their value.
    pub denied_labels: BTreeSet<String>,
    /// Labels whose absence is a violation.
    pub mandatory_labels: BTreeSet<String>,
    /// Labels whose value, when present, must match the pattern.
    pub constrained_labels: BTreeMap<String, LabelPattern>,
}

impl LabelPolicy {
    pub fn is_denied(&self, key: &str) -> bool {
        self.denied_labels.contains(key)
    }

    pub fn is_mandatory(&self, key: &str) -> bool {
        self.mandatory_labels.contains(key)
    }

    pub fn constraint(&self, key: &str) -> Option<&LabelPattern> {
        self.constrained_labels.get(key)
    }

    /// Keys that are both constrained and denied, in lexicographic order.
    pub fn constrained_and_denied(&self) -> Vec<&str> {
        self.constrained_labels
            .keys()
            .filter(|k| self.denied_labels.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Keys that are both mandatory and denied, in lexicographic order.
    pub fn mandatory_and_denied(&self) -> Vec<&str> {
        self.mandatory_labels
            .intersection(&self.denied_labels)
            .map(String::as_str)
            .collect()
    }

    /// A policy with no rules accepts every resource.
    pub fn is_empty(&self) -> bool {
        self.denied_labels.is_empty()
            && self.mandatory_labels.is_empty()
            && self.constrained_labels.is_empty()
    }
}
