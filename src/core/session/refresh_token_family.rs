/// State of a single refresh-token JTI within its family.
///
/// The KV store is the authority on current state; this type exists so the
/// rotation algorithm can be described and tested independent of Redis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    pub jti: String,
    pub family_id: String,
    pub user_id: String,
    pub session_id: String,
    pub parent_jti: Option<String>,
    pub rotated_to: Option<String>,
    pub consumed: bool,
}

impl RefreshTokenRecord {
    /// Build the first record of a new family (no parent, not yet consumed).
    pub fn open_family(
        jti: impl Into<String>,
        family_id: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            jti: jti.into(),
            family_id: family_id.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
            parent_jti: None,
            rotated_to: None,
            consumed: false,
        }
    }

    /// Build the next record in a family, descended from `parent`.
    pub fn descend(parent: &RefreshTokenRecord, new_jti: impl Into<String>) -> Self {
        Self {
            jti: new_jti.into(),
            family_id: parent.family_id.clone(),
            user_id: parent.user_id.clone(),
            session_id: parent.session_id.clone(),
            parent_jti: Some(parent.jti.clone()),
            rotated_to: None,
            consumed: false,
        }
    }
}

/// Outcome of presenting a JTI to `rotateFamily`.
///
/// `ReuseDetected` carries nothing beyond the family id: by the time this
/// value exists, every JTI and the session itself have already been torn
/// down by the store — the caller only needs the id to audit and report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    Rotated { new_jti: String },
    ReuseDetected { family_id: String },
    UnknownToken,
}

impl RotationOutcome {
    pub fn is_reuse_detected(&self) -> bool {
        matches!(self, Self::ReuseDetected { .. })
    }
}
