/// A short-lived token issued after password verification when MFA is
/// required, before a session exists. Stored under `mfachallenge/<token>`
/// with a 10-minute TTL; the core models only its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MfaChallenge {
    pub token: String,
    pub user_id: String,
    pub issued_at: String,
}

impl MfaChallenge {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, issued_at: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            issued_at: issued_at.into(),
        }
    }
}
