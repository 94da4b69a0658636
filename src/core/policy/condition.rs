use std::collections::HashMap;

/// A condition clause attached to a policy.
///
/// Conditions reference context by key; a key absent from the request's
/// context evaluates to `false` (fail-closed), never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Equals { context_key: String, value: String },
    InSet { context_key: String, values: Vec<String> },
    /// True when `context[context_key]` equals the subject's own user id —
    /// the building block for "users may act on resources they own".
    OwnershipOf { context_key: String },
}

impl Condition {
    pub fn evaluate(&self, subject_user_id: &str, context: &HashMap<String, String>) -> bool {
        match self {
            Self::Equals { context_key, value } => {
                context.get(context_key).is_some_and(|v| v == value)
            }
            Self::InSet { context_key, values } => context
                .get(context_key)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
            Self::OwnershipOf { context_key } => {
                context.get(context_key).is_some_and(|v| v == subject_user_id)
            }
        }
    }
}
