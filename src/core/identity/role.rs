/// A named role a principal can be assigned.
///
/// Roles are seeded at deployment and rarely mutated; the core only needs
/// their symbolic name for matching against policy subject-matchers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A grant of a `Role` to a principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleAssignment {
    pub user_id: String,
    pub role: String,
    pub granted_by: String,
    pub granted_at: String,
}

impl UserRoleAssignment {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>, granted_by: impl Into<String>, granted_at: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
            granted_by: granted_by.into(),
            granted_at: granted_at.into(),
        }
    }
}

/// The set of roles held by a principal, with the invariant that a
/// principal always holds at least one role once created — callers revoking
/// the last role must reject the mutation before it reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet {
    roles: Vec<String>,
}

impl RoleSet {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles }
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns the resulting set after removing `role`, or `None` if doing
    /// so would leave the principal with zero roles (invariant violation).
    pub fn without(&self, role: &str) -> Option<RoleSet> {
        let remaining: Vec<String> = self.roles.iter().filter(|r| r.as_str() != role).cloned().collect();
        if remaining.is_empty() {
            None
        } else {
            Some(RoleSet::new(remaining))
        }
    }

    pub fn with(&self, role: impl Into<String>) -> RoleSet {
        let role = role.into();
        if self.contains(&role) {
            self.clone()
        } else {
            let mut roles = self.roles.clone();
            roles.push(role);
            RoleSet::new(roles)
        }
    }
}
