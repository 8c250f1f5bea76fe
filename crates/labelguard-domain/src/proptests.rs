//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Empty policies accepting everything
//! - Each rule category reporting exactly its offenders
//! - Determinism of decisions and messages

use crate::engine::evaluate;
use crate::model::LabelMap;
use crate::pattern::LabelPattern;
use crate::policy::LabelPolicy;
use crate::report::{Decision, ViolationKind};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for label keys (DNS-label-ish, optionally prefixed).
fn arb_label_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap(),
        prop::string::string_regex("[a-z]{1,8}\\.io/[a-z][a-z0-9-]{0,10}").unwrap(),
    ]
}

/// Strategy for label values, including the empty value.
fn arb_label_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9._-]{0,20}").unwrap()
}

/// Strategy for label maps with unique keys.
fn arb_labels() -> impl Strategy<Value = LabelMap> {
    prop::collection::btree_map(arb_label_key(), arb_label_value(), 0..12)
        .prop_map(|m| m.into_iter().collect())
}

fn keys(labels: &LabelMap) -> BTreeSet<String> {
    labels.keys().map(str::to_string).collect()
}

fn offenders(decision: &Decision, kind: ViolationKind) -> Vec<String> {
    decision
        .violations()
        .iter()
        .find(|v| v.kind == kind)
        .map(|v| v.labels.clone())
        .unwrap_or_default()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A policy without rules never rejects.
    #[test]
    fn empty_policy_accepts_everything(labels in arb_labels()) {
        prop_assert_eq!(evaluate(&LabelPolicy::default(), &labels), Decision::Allow);
    }

    /// Every present denied key shows up in the denied clause, whatever its value.
    #[test]
    fn present_denied_keys_are_reported(labels in arb_labels(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!labels.is_empty());
        let key = labels.keys().nth(pick.index(labels.len())).unwrap().to_string();

        let mut policy = LabelPolicy::default();
        policy.denied_labels.insert(key.clone());

        let decision = evaluate(&policy, &labels);
        prop_assert!(!decision.is_allowed());
        prop_assert_eq!(offenders(&decision, ViolationKind::Denied), vec![key.clone()]);
        let message = decision.message().unwrap();
        prop_assert!(message.starts_with("The following labels are denied: "));
        prop_assert!(message.contains(&key));
    }

    /// Denied keys that are absent never cause a rejection.
    #[test]
    fn absent_denied_keys_are_ignored(labels in arb_labels(), denied in arb_label_key()) {
        prop_assume!(!labels.contains_key(&denied));

        let mut policy = LabelPolicy::default();
        policy.denied_labels.insert(denied);

        prop_assert!(evaluate(&policy, &labels).is_allowed());
    }

    /// Missing mandatory labels are exactly the set difference, sorted.
    #[test]
    fn missing_mandatory_is_set_difference(
        labels in arb_labels(),
        mandatory in prop::collection::btree_set(arb_label_key(), 0..6),
    ) {
        let policy = LabelPolicy {
            mandatory_labels: mandatory.clone(),
            ..LabelPolicy::default()
        };

        let present = keys(&labels);
        let expected: Vec<String> = mandatory.difference(&present).cloned().collect();

        let decision = evaluate(&policy, &labels);
        prop_assert_eq!(offenders(&decision, ViolationKind::MissingMandatory), expected.clone());
        prop_assert_eq!(decision.is_allowed(), expected.is_empty());
    }

    /// A constrained key is reported iff its value fails the pattern.
    #[test]
    fn constrained_reports_only_non_matching_values(
        key in arb_label_key(),
        value in arb_label_value(),
    ) {
        let pattern = LabelPattern::new(r"^team-[a-z]+$").unwrap();
        let matches = pattern.is_match(&value);

        let mut policy = LabelPolicy::default();
        policy.constrained_labels.insert(key.clone(), pattern);

        let labels: LabelMap = [(key.clone(), value)].into_iter().collect();
        let decision = evaluate(&policy, &labels);

        if matches {
            prop_assert!(decision.is_allowed());
        } else {
            prop_assert_eq!(offenders(&decision, ViolationKind::Constrained), vec![key]);
        }
    }

    /// Unconstrained, undenied labels never affect the outcome.
    #[test]
    fn extra_labels_do_not_change_decision(
        labels in arb_labels(),
        extra_key in arb_label_key(),
        extra_value in arb_label_value(),
    ) {
        prop_assume!(!labels.contains_key(&extra_key));

        let mut policy = LabelPolicy::default();
        policy.mandatory_labels.insert("owner".to_string());
        policy.denied_labels.insert("secret".to_string());
        prop_assume!(extra_key != "owner" && extra_key != "secret");

        let mut extended = labels.clone();
        extended.insert(extra_key, extra_value);

        prop_assert_eq!(evaluate(&policy, &labels), evaluate(&policy, &extended));
    }

    /// Violations always come out in category order, one entry per category.
    #[test]
    fn violation_categories_are_ordered_and_unique(labels in arb_labels()) {
        let policy = LabelPolicy {
            denied_labels: ["a", "b", "c"].iter().map(|s| s.to_string()).collect(),
            mandatory_labels: ["owner", "team"].iter().map(|s| s.to_string()).collect(),
            constrained_labels: [("d".to_string(), LabelPattern::new("^x").unwrap())]
                .into_iter()
                .collect(),
        };

        let decision = evaluate(&policy, &labels);
        let kinds: Vec<ViolationKind> = decision.violations().iter().map(|v| v.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(kinds, sorted);
        for v in decision.violations() {
            prop_assert!(!v.labels.is_empty());
        }
    }

    /// Same inputs, same decision.
    #[test]
    fn evaluation_is_deterministic(labels in arb_labels()) {
        let policy = LabelPolicy {
            denied_labels: ["app"].iter().map(|s| s.to_string()).collect(),
            mandatory_labels: ["owner"].iter().map(|s| s.to_string()).collect(),
            constrained_labels: [("tier".to_string(), LabelPattern::new("^(web|db)$").unwrap())]
                .into_iter()
                .collect(),
        };

        let first = evaluate(&policy, &labels);
        let second = evaluate(&policy, &labels);
        prop_assert_eq!(first.message(), second.message());
        prop_assert_eq!(first, second);
    }
}
