//! Fuzz target for rule evaluation over structured settings and labels.
//!
//! Goal: evaluation should **never panic**, and a rejection must always name at least one label.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_label_rules
//! ```

#![no_main]

use arbitrary::Arbitrary;
use labelguard_domain::{LabelMap, evaluate};
use labelguard_settings::SettingsDocumentV1;
use libfuzzer_sys::fuzz_target;

/// Structured input for rule evaluation fuzzing.
#[derive(Arbitrary, Debug)]
struct RulesInput {
    denied: Vec<String>,
    mandatory: Vec<String>,
    /// Constrained label names and their pattern sources
    constrained: Vec<(String, String)>,
    labels: Vec<(String, String)>,
}

fuzz_target!(|input: RulesInput| {
    // Limit input size to keep fuzzing fast
    if input.constrained.len() > 8 || input.labels.len() > 64 {
        return;
    }
    if input.constrained.iter().any(|(_, pattern)| pattern.len() > 64) {
        return;
    }

    let document = SettingsDocumentV1 {
        denied_labels: input.denied,
        mandatory_labels: input.mandatory,
        constrained_labels: input.constrained.into_iter().collect(),
    };

    // Invalid patterns are fine, they are reported as errors.
    let Ok(policy) = labelguard_settings::compile_settings(document) else {
        return;
    };

    let labels: LabelMap = input.labels.into_iter().collect();
    let decision = evaluate(&policy, &labels);

    for violation in decision.violations() {
        assert!(!violation.labels.is_empty());
    }
    assert_eq!(decision.is_allowed(), decision.message().is_none());
});
