use crate::model::LabelMap;
use crate::pattern::LabelPattern;
use crate::policy::LabelPolicy;

pub fn policy(denied: &[&str], mandatory: &[&str], constrained: &[(&str, &str)]) -> LabelPolicy {
    LabelPolicy {
        denied_labels: denied.iter().map(|s| s.to_string()).collect(),
        mandatory_labels: mandatory.iter().map(|s| s.to_string()).collect(),
        constrained_labels: constrained
            .iter()
            .map(|(k, p)| {
                (
                    k.to_string(),
                    LabelPattern::new(p).expect("test patterns must compile"),
                )
            })
            .collect(),
    }
}

pub fn labels(pairs: &[(&str, &str)]) -> LabelMap {
    pairs.iter().copied().collect()
}
