/// Errors from authorization decision evaluation.

/*
 This error type answers the question: "Why could a policy decision not be
 reached?" It does not carry the decision itself (Allow/Deny are ordinary
 values, not errors) — only the cases where evaluation cannot produce one.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The subject carries no roles the policy set recognizes.
    UnknownSubject { subject: String },
    /// A condition referenced a context key the caller did not supply.
    MissingContext { key: String },
    /// The policy set could not be loaded (seed data missing or corrupt).
    PolicySetUnavailable { reason: String },
}

impl PolicyError {
    pub fn unknown_subject(subject: impl Into<String>) -> Self {
        Self::UnknownSubject {
            subject: subject.into(),
        }
    }

    pub fn missing_context(key: impl Into<String>) -> Self {
        Self::MissingContext { key: key.into() }
    }

    pub fn policy_set_unavailable(reason: impl Into<String>) -> Self {
        Self::PolicySetUnavailable {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSubject { subject } => write!(f, "Unknown subject: {}", subject),
            Self::MissingContext { key } => {
                write!(f, "Policy condition references missing context key: {}", key)
            }
            Self::PolicySetUnavailable { reason } => {
                write!(f, "Policy set unavailable: {}", reason)
            }
        }
    }
}
