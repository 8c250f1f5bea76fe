use crate::error::SettingsError;
use crate::model::SettingsDocumentV1;
use labelguard_domain::{LabelPattern, LabelPolicy};
use labelguard_types::ids;
use std::collections::BTreeMap;

/// Turn a raw document into a policy, compiling every pattern.
///
/// Duplicate list entries collapse. The first pattern that fails to compile (in label order)
/// aborts the whole conversion.
pub fn compile_settings(doc: SettingsDocumentV1) -> Result<LabelPolicy, SettingsError> {
    let mut constrained_labels = BTreeMap::new();
    for (label, source) in doc.constrained_labels {
        let pattern = match LabelPattern::new(&source) {
            Ok(p) => p,
            Err(source) => return Err(SettingsError::InvalidPattern { label, source }),
        };
        constrained_labels.insert(label, pattern);
    }

    Ok(LabelPolicy {
        denied_labels: doc.denied_labels.into_iter().collect(),
        mandatory_labels: doc.mandatory_labels.into_iter().collect(),
        constrained_labels,
    })
}

/// Check that no label is denied while also being constrained or mandatory.
pub fn validate_policy(policy: &LabelPolicy) -> Result<(), SettingsError> {
    let mut errors = Vec::new();

    let constrained_and_denied = policy.constrained_and_denied();
    if !constrained_and_denied.is_empty() {
        errors.push(format!(
            "{}{}",
            ids::MSG_CONSTRAINED_AND_DENIED,
            constrained_and_denied.join(ids::LABEL_SEPARATOR)
        ));
    }

    let mandatory_and_denied = policy.mandatory_and_denied();
    if !mandatory_and_denied.is_empty() {
        errors.push(format!(
            "{}{}",
            ids::MSG_MANDATORY_AND_DENIED,
            mandatory_and_denied.join(ids::LABEL_SEPARATOR)
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SettingsError::Conflicting(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(denied: &[&str], mandatory: &[&str], constrained: &[(&str, &str)]) -> SettingsDocumentV1 {
        SettingsDocumentV1 {
            denied_labels: denied.iter().map(|s| s.to_string()).collect(),
            mandatory_labels: mandatory.iter().map(|s| s.to_string()).collect(),
            constrained_labels: constrained
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn compiles_patterns_and_collapses_duplicates() {
        let policy = compile_settings(doc(
            &["foo", "bar", "foo"],
            &["owner", "owner"],
            &[("cost-center", r"cc-\d+")],
        ))
        .expect("valid settings");

        assert_eq!(policy.denied_labels.len(), 2);
        assert_eq!(policy.mandatory_labels.len(), 1);
        assert_eq!(
            policy.constraint("cost-center").map(LabelPattern::as_str),
            Some(r"cc-\d+")
        );
    }

    #[test]
    fn broken_pattern_names_label_and_keeps_diagnostic() {
        let err = compile_settings(doc(&[], &[], &[("cost-center", "cc-[a+")]))
            .expect_err("broken pattern");
        assert!(matches!(err, SettingsError::InvalidPattern { ref label, .. } if label == "cost-center"));

        let message = err.to_string();
        assert!(message.starts_with("invalid pattern for constrained label cost-center: "));
        assert!(message.contains("unclosed character class"));
    }

    #[test]
    fn empty_policy_is_valid() {
        assert!(validate_policy(&LabelPolicy::default()).is_ok());
    }

    #[test]
    fn constrained_and_denied_conflict() {
        let policy = compile_settings(doc(
            &["foo", "bar", "cost-center"],
            &["owner"],
            &[("cost-center", ".*")],
        ))
        .expect("compiles");
        let err = validate_policy(&policy).expect_err("conflict");
        assert_eq!(
            err.to_string(),
            "These labels cannot be constrained and denied at the same time: cost-center"
        );
    }

    #[test]
    fn mandatory_and_denied_conflict() {
        let policy = compile_settings(doc(
            &["foo", "bar", "owner"],
            &["owner"],
            &[("cost-center", ".*")],
        ))
        .expect("compiles");
        let err = validate_policy(&policy).expect_err("conflict");
        assert_eq!(
            err.to_string(),
            "These labels cannot be mandatory and denied at the same time: owner"
        );
    }

    #[test]
    fn both_conflicts_are_reported_constrained_first() {
        let policy = compile_settings(doc(
            &["owner", "team", "cost-center", "tier"],
            &["team", "owner"],
            &[("tier", ".*"), ("cost-center", ".*")],
        ))
        .expect("compiles");
        let err = validate_policy(&policy).expect_err("conflicts");
        insta::assert_snapshot!(
            err.to_string(),
            @"These labels cannot be constrained and denied at the same time: cost-center,tier; These labels cannot be mandatory and denied at the same time: owner,team"
        );
    }
}
