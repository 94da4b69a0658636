use std::collections::HashMap;

/// The subject of an authorization check: a user id plus the roles held at
/// check time (PDP reads roles fresh, unlike the role snapshot stamped into
/// an access token at mint time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub user_id: String,
    pub roles: Vec<String>,
}

impl Subject {
    pub fn new(user_id: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }
}

/// An authorization request: {subject, action, resource, context}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub subject: Subject,
    pub action: String,
    pub resource: String,
    pub context: HashMap<String, String>,
}

impl Decision {
    pub fn new(subject: Subject, action: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            subject,
            action: action.into(),
            resource: resource.into(),
            context: HashMap::new(),
        }
    }

    pub fn with_context(mut self, context: HashMap<String, String>) -> Self {
        self.context = context;
        self
    }

    /// The decision-cache key: `hash(subject.id, action, resource)`. Built
    /// here so the adapter's cache and any test can agree on its shape
    /// without duplicating the concatenation rule.
    pub fn cache_key(&self) -> String {
        format!("{}|{}|{}", self.subject.user_id, self.action, self.resource)
    }
}
