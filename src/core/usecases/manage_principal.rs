//! Use cases: AssignRole, RevokeRole, DeactivateUser
//!
//! The three admin mutations over a principal's standing. All three share
//! the same shape: mutate the store, invalidate the PDP's cached decisions
//! for the subject before returning, then AuditLog (High write mode) and
//! EventBus.

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::{CoreError, InvariantError};
use crate::core::event::DomainEvent;
use crate::core::identity::PrincipalStatus;
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, IdentityRepository, PolicyEngine, SessionStore};

pub struct AssignRoleInput {
    pub user_id: String,
    pub role: String,
    pub granted_by: String,
}

pub struct RevokeRoleInput {
    pub user_id: String,
    pub role: String,
}

pub struct DeactivateUserInput {
    pub user_id: String,
}

/// Use case composing role/status mutation, PDP cache invalidation, and
/// audit/event emission for principal administration.
pub struct ManagePrincipal {
    identity_repo: Arc<dyn IdentityRepository>,
    session_store: Arc<dyn SessionStore>,
    policy_engine: Arc<dyn PolicyEngine>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
}

impl ManagePrincipal {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        session_store: Arc<dyn SessionStore>,
        policy_engine: Arc<dyn PolicyEngine>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity_repo,
            session_store,
            policy_engine,
            audit_log,
            event_bus,
            clock,
        }
    }

    pub async fn assign_role(&self, input: AssignRoleInput) -> Result<(), CoreError> {
        let roles = self.identity_repo.roles_for(&input.user_id).await?;
        let updated = roles.with(&input.role);
        self.identity_repo.save_roles(&input.user_id, &updated).await?;
        self.policy_engine.invalidate_subject(&input.user_id).await?;
        self.emit("role.assigned", &input.user_id, Some(&input.role)).await?;
        Ok(())
    }

    pub async fn revoke_role(&self, input: RevokeRoleInput) -> Result<(), CoreError> {
        let roles = self.identity_repo.roles_for(&input.user_id).await?;
        let updated = roles
            .without(&input.role)
            .ok_or_else(|| InvariantError::violated("cannot revoke a principal's last role"))?;
        self.identity_repo.save_roles(&input.user_id, &updated).await?;
        self.policy_engine.invalidate_subject(&input.user_id).await?;
        self.emit("role.revoked", &input.user_id, Some(&input.role)).await?;
        Ok(())
    }

    pub async fn deactivate(&self, input: DeactivateUserInput) -> Result<(), CoreError> {
        let mut principal = self
            .identity_repo
            .find_principal(&input.user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Principal", &input.user_id))?;
        principal.status = PrincipalStatus::Deactivated;
        self.identity_repo.save_principal(&principal).await?;
        self.session_store.revoke_all_for_user(&input.user_id).await?;
        self.policy_engine.invalidate_subject(&input.user_id).await?;
        self.emit("user.deactivated", &input.user_id, None).await?;
        Ok(())
    }

    async fn emit(&self, event_type: &str, user_id: &str, role: Option<&str>) -> Result<(), CoreError> {
        let now = self.clock.now().to_rfc3339();
        let event_id = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string();

        let mut event = AuthEvent::new(event_id.clone(), event_type, &now, user_id);
        let mut domain_event = DomainEvent::new(event_id, event_type, &now).with_subject(user_id);
        if let Some(role) = role {
            let mut payload = std::collections::HashMap::new();
            payload.insert("role".to_string(), role.to_string());
            event = event.with_payload(payload.clone());
            domain_event = domain_event.with_data(payload);
        }

        self.audit_log.append(event).await?;
        self.event_bus.publish(domain_event).await;
        Ok(())
    }
}
