use crate::model::LabelMap;
use crate::policy::LabelPolicy;
use crate::report::{Decision, Violation, ViolationKind};

/// Evaluate one resource's labels against a validated policy.
///
/// Every category is evaluated and reported; nothing short-circuits on the first violation.
/// Denied and constrained offenders are listed in label order, missing mandatory labels in
/// lexicographic order.
pub fn evaluate(policy: &LabelPolicy, labels: &LabelMap) -> Decision {
    let mut denied: Vec<String> = Vec::new();
    let mut constrained: Vec<String> = Vec::new();

    for (key, value) in labels.iter() {
        // Denied wins over constrained for the same key.
        if policy.is_denied(key) {
            denied.push(key.to_string());
            continue;
        }
        if let Some(pattern) = policy.constraint(key)
            && !pattern.is_match(value)
        {
            constrained.push(key.to_string());
        }
    }

    let missing: Vec<String> = policy
        .mandatory_labels
        .iter()
        .filter(|k| !labels.contains_key(k))
        .cloned()
        .collect();

    tracing::debug!(
        labels = labels.len(),
        denied = denied.len(),
        constrained = constrained.len(),
        missing = missing.len(),
        "evaluated labels"
    );

    let violations = [
        (ViolationKind::Denied, denied),
        (ViolationKind::Constrained, constrained),
        (ViolationKind::MissingMandatory, missing),
    ]
    .into_iter()
    .filter(|(_, labels)| !labels.is_empty())
    .map(|(kind, labels)| Violation { kind, labels })
    .collect();

    Decision::from_violations(violations)
}
