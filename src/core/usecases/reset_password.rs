//! Use case: ResetPassword
//!
//! Consumes a reset token minted by `RequestPasswordReset`, validates and
//! applies the new password, and revokes every session the user holds —
//! a password reset is a full credential replacement, not an incremental
//! change.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::core::audit::AuthEvent;
use crate::core::error::{AuthenticationError, CoreError, CredentialError};
use crate::core::event::DomainEvent;
use crate::core::usecases::ports::{AuditLog, Clock, CredentialRepository, EventBus, PasswordHasher, SessionStore};

/// Input contract for ResetPassword use case.
pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
}

pub struct ResetPassword {
    credential_repo: Arc<dyn CredentialRepository>,
    session_store: Arc<dyn SessionStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
}

impl ResetPassword {
    pub fn new(
        credential_repo: Arc<dyn CredentialRepository>,
        session_store: Arc<dyn SessionStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            credential_repo,
            session_store,
            password_hasher,
            audit_log,
            event_bus,
            clock,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), CoreError> {
        if !self.password_hasher.meets_strength_bar(&input.new_password) {
            return Err(CredentialError::insufficient_strength("password does not meet the minimum strength bar").into());
        }

        let token_hash = hash_token(&input.token);
        let user_id = self
            .credential_repo
            .consume_reset_token(&token_hash)
            .await?
            .ok_or_else(|| CoreError::from(AuthenticationError::incomplete_flow("reset token unknown or expired")))?;

        let stored = self.password_hasher.hash(&input.new_password);
        self.credential_repo.update_password(&user_id, stored).await?;
        self.session_store.revoke_all_for_user(&user_id).await?;

        let now = self.clock.now().to_rfc3339();
        let event_id = new_uuid();
        self.audit_log
            .append(AuthEvent::new(event_id.clone(), "password.changed", &now, &user_id))
            .await?;
        self.event_bus
            .publish(DomainEvent::new(event_id, "password.changed", &now).with_subject(&user_id))
            .await;

        Ok(())
    }
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
