use std::collections::HashMap;

/// Whether an `AuthEvent` must be written synchronously on the critical
/// path before the triggering call returns, or may be buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Synchronous,
    Buffered,
}

/// Determines the required write mode from the event type, per the
/// closed list of security-critical types that must never be lost to a
/// buffering delay.
pub fn write_mode_for(event_type: &str) -> WriteMode {
    const SYNCHRONOUS_TYPES: &[&str] = &[
        "login.success",
        "login.failed",
        "refresh.reuse_detected",
        "mfa.failed",
        "password.changed",
        "credential.changed",
        "role.assigned",
        "role.revoked",
    ];
    if SYNCHRONOUS_TYPES.contains(&event_type) {
        WriteMode::Synchronous
    } else {
        WriteMode::Buffered
    }
}

/// An append-only audit record. `AuthEvent`s are never mutated once
/// written; the store that owns them enforces retention (2 years) and
/// time-partitioning, neither of which is a concern of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEvent {
    pub event_id: String,
    pub event_type: String,
    pub timestamp: String,
    pub subject: String,
    pub actor: Option<String>,
    pub resource: Option<String>,
    pub payload: HashMap<String, String>,
    pub ip: Option<String>,
    pub user_agent_hash: Option<String>,
    pub risk_score: Option<u8>,
}

impl AuthEvent {
    pub fn new(event_id: impl Into<String>, event_type: impl Into<String>, timestamp: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            event_type: event_type.into(),
            timestamp: timestamp.into(),
            subject: subject.into(),
            actor: None,
            resource: None,
            payload: HashMap::new(),
            ip: None,
            user_agent_hash: None,
            risk_score: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_payload(mut self, payload: HashMap<String, String>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_user_agent_hash(mut self, hash: impl Into<String>) -> Self {
        self.user_agent_hash = Some(hash.into());
        self
    }

    pub fn with_risk_score(mut self, risk_score: u8) -> Self {
        self.risk_score = Some(risk_score);
        self
    }

    pub fn write_mode(&self) -> WriteMode {
        write_mode_for(&self.event_type)
    }
}
