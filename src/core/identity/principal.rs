/// Lifecycle status of a `Principal`.
///
/// `Deactivated` is terminal: the core never reactivates a principal from
/// this state, and the principal's id is never reused even though the
/// record itself is retained for audit linkage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalStatus {
    PendingVerification,
    Active,
    Suspended,
    Deactivated,
}

impl PrincipalStatus {
    /// True if a principal in this status may authenticate at all.
    pub fn can_authenticate(&self) -> bool {
        matches!(self, Self::PendingVerification | Self::Active)
    }

    /// True if the principal may perform privileged operations (trading
    /// account linkage, password-protected actions). Only `Active`
    /// principals qualify; `PendingVerification` is authenticated but not
    /// privileged until verification completes.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deactivated)
    }
}

/// Provenance of a principal's verified email, when relevant to onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

/// Core principal (user) record.
///
/// Case-folding of `email` is the caller's responsibility at the
/// persistence boundary (uniqueness is enforced there); this type stores
/// whatever it is given and makes no claim about canonical form beyond
/// what invariants it can check locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub phone: Option<String>,
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub status: PrincipalStatus,
    pub mfa_enabled: bool,
    pub oauth_provider: Option<OAuthProvider>,
}

impl Principal {
    pub fn new(id: impl Into<String>, email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
            phone: None,
            timezone: None,
            locale: None,
            status: PrincipalStatus::PendingVerification,
            mfa_enabled: false,
            oauth_provider: None,
        }
    }

    pub fn is_privileged(&self) -> bool {
        self.status.is_privileged()
    }

    pub fn can_authenticate(&self) -> bool {
        self.status.can_authenticate()
    }
}
