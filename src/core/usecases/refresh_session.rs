//! Use case: RefreshSession
//!
//! Orchestrates refresh-token rotation and access-token renewal.
//!
//! Responsibilities:
//! - Validate the presented refresh JWT (signature, expiry, kind)
//! - Atomically rotate its family via SessionStore
//! - On reuse, audit + publish `refresh.reuse_detected` and report the
//!   session as revoked
//! - Otherwise mint a fresh access + refresh pair under the new jti and
//!   touch the session's last-active timestamp

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::{AuthenticationError, CoreError};
use crate::core::event::DomainEvent;
use crate::core::identity::IdentityClaims;
use crate::core::session::RefreshTokenRecord;
use crate::core::token::{TokenClaims, TokenKind};
use crate::core::usecases::policies::TokenPolicy;
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, IdentityRepository, IssuedToken, SessionStore, TokenIssuer};

/// Input contract for RefreshSession use case.
pub struct RefreshSessionInput {
    pub refresh_token: String,
}

/// Output contract for RefreshSession use case.
pub struct RefreshSessionOutput {
    pub access_token: IssuedToken,
    pub refresh_token: IssuedToken,
    pub session_id: String,
}

pub struct RefreshSession {
    token_issuer: Arc<dyn TokenIssuer>,
    session_store: Arc<dyn SessionStore>,
    identity_repo: Arc<dyn IdentityRepository>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
    token_policy: TokenPolicy,
}

impl RefreshSession {
    pub fn new(
        token_issuer: Arc<dyn TokenIssuer>,
        session_store: Arc<dyn SessionStore>,
        identity_repo: Arc<dyn IdentityRepository>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
        token_policy: TokenPolicy,
    ) -> Self {
        Self {
            token_issuer,
            session_store,
            identity_repo,
            audit_log,
            event_bus,
            clock,
            token_policy,
        }
    }

    pub async fn execute(&self, input: RefreshSessionInput) -> Result<RefreshSessionOutput, CoreError> {
        let claims = self.token_issuer.validate(&input.refresh_token).await?;

        if claims.kind != TokenKind::Refresh {
            return Err(AuthenticationError::unsupported_auth_method("refresh requires a refresh token").into());
        }

        let user_id = claims.identity.user_id.clone().ok_or_else(|| {
            AuthenticationError::incomplete_flow("refresh token missing subject")
        })?;
        let session_id = claims.sid.clone().ok_or_else(|| AuthenticationError::incomplete_flow("refresh token missing sid"))?;
        let family_id = claims.family.clone().ok_or_else(|| AuthenticationError::incomplete_flow("refresh token missing family"))?;
        let presented_jti = claims.jti.clone().ok_or_else(|| AuthenticationError::incomplete_flow("refresh token missing jti"))?;

        let new_jti = new_uuid();
        let presented_record = RefreshTokenRecord {
            jti: presented_jti.clone(),
            family_id: family_id.clone(),
            user_id: user_id.clone(),
            session_id: session_id.clone(),
            parent_jti: None,
            rotated_to: None,
            consumed: false,
        };
        let next_record = RefreshTokenRecord::descend(&presented_record, &new_jti);

        let outcome = self.session_store.rotate_family(&presented_jti, next_record).await?;

        match outcome {
            crate::core::session::RotationOutcome::ReuseDetected { family_id } => {
                let mut data = std::collections::HashMap::new();
                data.insert("family_id".to_string(), family_id.clone());
                let event = DomainEvent::new(new_uuid(), "refresh.reuse_detected", now_rfc3339(&self.clock))
                    .with_subject(&user_id)
                    .with_data(data);
                self.event_bus.publish(event).await;
                self.audit_log
                    .append(AuthEvent::new(new_uuid(), "refresh.reuse_detected", now_rfc3339(&self.clock), &user_id))
                    .await?;
                Err(CoreError::reuse_detected(family_id))
            }
            crate::core::session::RotationOutcome::UnknownToken => {
                Err(AuthenticationError::user_not_found("refresh token unknown").into())
            }
            crate::core::session::RotationOutcome::Rotated { new_jti } => {
                let now = self.clock.now();
                let now_str = now.to_rfc3339();
                self.session_store.touch_session(&session_id, &now_str).await?;

                let roles = self.identity_repo.roles_for(&user_id).await?;
                let identity = IdentityClaims {
                    user_id: Some(user_id.clone()),
                    workspace_id: None,
                };

                let access_expires_at = (now + chrono::Duration::seconds(self.token_policy.access_ttl() as i64)).to_rfc3339();
                let access_claims = TokenClaims::new(identity.clone(), TokenKind::Access, &now_str, access_expires_at)
                    .with_sid(&session_id)
                    .with_roles(roles.as_slice().to_vec());

                let refresh_expires_at = (now + chrono::Duration::seconds(self.token_policy.refresh_ttl() as i64)).to_rfc3339();
                let refresh_claims = TokenClaims::new(identity, TokenKind::Refresh, &now_str, refresh_expires_at)
                    .with_sid(&session_id)
                    .with_jti(&new_jti)
                    .with_family(&family_id);

                let access_token = self.token_issuer.mint(&access_claims).await?;
                let refresh_token = self.token_issuer.mint(&refresh_claims).await?;

                Ok(RefreshSessionOutput {
                    access_token,
                    refresh_token,
                    session_id,
                })
            }
        }
    }
}

fn now_rfc3339(clock: &Arc<dyn Clock>) -> String {
    clock.now().to_rfc3339()
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
