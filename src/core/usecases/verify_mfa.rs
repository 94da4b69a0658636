//! Use case: VerifyMfa
//!
//! Resolves a challenge issued by `Login`, verifies the presented code,
//! and on success issues the session `Login` withheld.
//!
//! Responsibilities:
//! - Consume the challenge token (one-shot, TTL-checked)
//! - MfaEngine.verify; failure → AuditLog `mfa.failed`
//! - Success → IssueSession with `mfa_verified = true`; AuditLog +
//!   EventBus `login.success{mfa_verified=true}`

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::CoreError;
use crate::core::event::DomainEvent;
use crate::core::session::SessionPersistence;
use crate::core::usecases::issue_session::{IssueSession, IssueSessionInput, IssueSessionOutput};
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, IdentityRepository, MfaEngineService};

/// Input contract for VerifyMfa use case.
pub struct VerifyMfaInput {
    pub challenge: String,
    pub code: String,
    pub device_fingerprint: String,
    pub creating_ip: String,
    pub remember_me: bool,
}

pub struct VerifyMfa {
    identity_repo: Arc<dyn IdentityRepository>,
    mfa_engine: Arc<dyn MfaEngineService>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
    issue_session: IssueSession,
}

impl VerifyMfa {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        mfa_engine: Arc<dyn MfaEngineService>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
        issue_session: IssueSession,
    ) -> Self {
        Self {
            identity_repo,
            mfa_engine,
            audit_log,
            event_bus,
            clock,
            issue_session,
        }
    }

    pub async fn execute(&self, input: VerifyMfaInput) -> Result<IssueSessionOutput, CoreError> {
        let challenge = self.mfa_engine.consume_challenge(&input.challenge).await?;
        let now = self.clock.now().to_rfc3339();

        if self.mfa_engine.verify(&challenge.user_id, &input.code).await.is_err() {
            let mut payload = HashMap::new();
            payload.insert("reason".to_string(), "invalid_code".to_string());
            self.audit_log
                .append(AuthEvent::new(new_uuid(), "mfa.failed", &now, &challenge.user_id).with_payload(payload))
                .await?;
            return Err(crate::core::error::MfaError::InvalidCode.into());
        }

        let roles = self.identity_repo.roles_for(&challenge.user_id).await?;
        let persistence = if input.remember_me {
            SessionPersistence::Persistent
        } else {
            SessionPersistence::Ephemeral
        };

        let issued = self
            .issue_session
            .execute(IssueSessionInput {
                user_id: challenge.user_id.clone(),
                roles: roles.as_slice().to_vec(),
                acct_ids: Vec::new(),
                mfa_verified: true,
                device_fingerprint: input.device_fingerprint,
                creating_ip: input.creating_ip,
                persistence,
            })
            .await?;

        let mut payload = HashMap::new();
        payload.insert("mfa_verified".to_string(), "true".to_string());
        self.audit_log
            .append(AuthEvent::new(new_uuid(), "login.success", &now, &challenge.user_id).with_payload(payload))
            .await?;
        self.event_bus
            .publish(DomainEvent::new(new_uuid(), "login.success", &now).with_subject(&challenge.user_id))
            .await;

        Ok(issued)
    }
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
