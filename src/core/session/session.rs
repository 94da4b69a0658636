/// Whether a session was created with "remember me" semantics.
///
/// Persistent sessions get the long absolute TTL (default 90 days);
/// ephemeral sessions get the short one (default 24 h). Both kinds are
/// additionally subject to the inactivity TTL (default 14 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPersistence {
    Persistent,
    Ephemeral,
}

impl SessionPersistence {
    pub fn default_ttl_secs(&self) -> u64 {
        match self {
            Self::Persistent => 90 * 24 * 3600,
            Self::Ephemeral => 24 * 3600,
        }
    }
}

/// A session record as the core domain understands it.
///
/// The key-value store adds its own TTL bookkeeping on top of this; the
/// domain type only knows the semantic fields and temporal predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub device_fingerprint: String,
    pub creating_ip: String,
    pub created_at: String,
    pub last_active_at: String,
    pub mfa_verified: bool,
    pub persistence: SessionPersistence,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        device_fingerprint: impl Into<String>,
        creating_ip: impl Into<String>,
        created_at: impl Into<String>,
        persistence: SessionPersistence,
    ) -> Self {
        let created_at = created_at.into();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            device_fingerprint: device_fingerprint.into(),
            creating_ip: creating_ip.into(),
            last_active_at: created_at.clone(),
            created_at,
            mfa_verified: false,
            persistence,
        }
    }

    pub fn with_mfa_verified(mut self, verified: bool) -> Self {
        self.mfa_verified = verified;
        self
    }

    /// Return a copy with `last_active_at` advanced. Absolute and inactivity
    /// TTL enforcement live in the SessionStore adapter, which owns a clock;
    /// the domain type only knows how to record the touch.
    pub fn touched(&self, now: impl Into<String>) -> Self {
        let mut touched = self.clone();
        touched.last_active_at = now.into();
        touched
    }
}
