//! Use case: OauthCallback
//!
//! Completes a Google OAuth login: exchanges the authorization code for a
//! provider-verified identity, links it to an existing principal or
//! provisions a new one, and issues a session directly (no password step,
//! no MFA challenge — the provider already proved the identity).
//!
//! Responsibilities:
//! - OAuthClient.exchange(provider, code, state); CSRF-state matching is
//!   the adapter's job, not this use case's
//! - If the verified email resolves to an existing principal, link the
//!   provider onto it; otherwise create one with `Status = Active`
//!   (provider-verified email skips the pending-verification step)
//! - IssueSession; AuditLog + EventBus `login.success`

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::event::DomainEvent;
use crate::core::identity::{OAuthProvider, Principal, PrincipalStatus, RoleSet};
use crate::core::error::CoreError;
use crate::core::session::SessionPersistence;
use crate::core::usecases::issue_session::{IssueSession, IssueSessionInput, IssueSessionOutput};
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, IdentityRepository, OAuthClient};

const DEFAULT_ROLE: &str = "user";

/// Input contract for OauthCallback use case.
pub struct OauthCallbackInput {
    pub provider: OAuthProvider,
    pub code: String,
    pub state: String,
    pub device_fingerprint: String,
    pub creating_ip: String,
}

pub struct OauthCallback {
    identity_repo: Arc<dyn IdentityRepository>,
    oauth_client: Arc<dyn OAuthClient>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
    issue_session: IssueSession,
}

impl OauthCallback {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        oauth_client: Arc<dyn OAuthClient>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
        issue_session: IssueSession,
    ) -> Self {
        Self {
            identity_repo,
            oauth_client,
            audit_log,
            event_bus,
            clock,
            issue_session,
        }
    }

    pub async fn execute(&self, input: OauthCallbackInput) -> Result<IssueSessionOutput, CoreError> {
        let verified = self
            .oauth_client
            .exchange(input.provider.clone(), &input.code, &input.state)
            .await?;

        let email = verified.email.trim().to_lowercase();
        let user = self.identity_repo.find_by_identifier(&email).await?;

        let user_id = match user {
            Some(user) => {
                if let Some(mut principal) = self.identity_repo.find_principal(&user.id).await? {
                    principal.oauth_provider = Some(verified.provider.clone());
                    self.identity_repo.save_principal(&principal).await?;
                }
                user.id
            }
            None => {
                let new_id = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
                self.identity_repo
                    .create(&new_id, &email, "", "", "oauth", 0)
                    .await?;
                let mut principal = Principal::new(new_id.to_string(), &email, &email);
                principal.status = PrincipalStatus::Active;
                principal.oauth_provider = Some(verified.provider.clone());
                self.identity_repo.save_principal(&principal).await?;
                self.identity_repo
                    .save_roles(&new_id.to_string(), &RoleSet::new(vec![DEFAULT_ROLE.to_string()]))
                    .await?;
                new_id.to_string()
            }
        };

        let roles = self.identity_repo.roles_for(&user_id).await?;
        let issued = self
            .issue_session
            .execute(IssueSessionInput {
                user_id: user_id.clone(),
                roles: roles.as_slice().to_vec(),
                acct_ids: Vec::new(),
                mfa_verified: false,
                device_fingerprint: input.device_fingerprint,
                creating_ip: input.creating_ip,
                persistence: SessionPersistence::Ephemeral,
            })
            .await?;

        let now = self.clock.now().to_rfc3339();
        self.audit_log
            .append(AuthEvent::new(new_uuid(), "login.success", &now, &user_id))
            .await?;
        self.event_bus
            .publish(DomainEvent::new(new_uuid(), "login.success", &now).with_subject(&user_id))
            .await;

        Ok(issued)
    }
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
