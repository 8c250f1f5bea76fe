use labelguard_types::ids;

/// Rule category a violation belongs to. Declaration order is report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViolationKind {
    Denied,
    Constrained,
    MissingMandatory,
}

impl ViolationKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ViolationKind::Denied => ids::MSG_DENIED_LABELS,
            ViolationKind::Constrained => ids::MSG_CONSTRAINED_LABELS,
            ViolationKind::MissingMandatory => ids::MSG_MISSING_MANDATORY_LABELS,
        }
    }
}

/// All offending labels of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub labels: Vec<String>,
}

impl Violation {
    pub fn message(&self) -> String {
        format!(
            "{}{}",
            self.kind.prefix(),
            self.labels.join(ids::LABEL_SEPARATOR)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// At least one violation, one entry per violated category.
    Deny { violations: Vec<Violation> },
}

impl Decision {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Decision::Allow
        } else {
            Decision::Deny { violations }
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Decision::Allow => &[],
            Decision::Deny { violations } => violations,
        }
    }

    /// The rejection message, or `None` when the decision is allow.
    pub fn message(&self) -> Option<String> {
        match self {
            Decision::Allow => None,
            Decision::Deny { violations } => Some(
                violations
                    .iter()
                    .map(Violation::message)
                    .collect::<Vec<_>>()
                    .join(ids::VIOLATION_SEPARATOR),
            ),
        }
    }
}
