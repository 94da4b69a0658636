//! Use case: Login
//!
//! Composes rate limiting, `AuthenticateUser`, and either an MFA challenge
//! or straight-through `IssueSession`, per the login state machine.
//!
//! Responsibilities:
//! - checkRateLimit(`login`, email, 5/15min); over budget → `RateLimited`
//! - AuthenticateUser; any failure is reported generically (no oracle)
//! - If the principal has MFA enabled, issue a challenge instead of a
//!   session and report `MfaRequired`
//! - Otherwise issue a session directly
//! - AuditLog + EventBus `login.success` / `login.failed`
//!
//! Does NOT:
//! - Verify MFA codes (see VerifyMfa)

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::{AuthenticationError, CoreError};
use crate::core::event::DomainEvent;
use crate::core::session::SessionPersistence;
use crate::core::usecases::authenticate_user::{AuthenticateUser, AuthenticateUserInput};
use crate::core::usecases::issue_session::{IssueSession, IssueSessionInput, IssueSessionOutput};
use crate::core::usecases::ports::{AuditLog, Clock, EventBus, IdentityRepository, MfaEngineService, SessionStore};

const RATE_LIMIT_SCOPE: &str = "login";
const RATE_LIMIT_COUNT: u32 = 5;
const RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;

/// Input contract for Login use case.
pub struct LoginInput {
    pub identifier: String,
    pub password: String,
    pub device_fingerprint: String,
    pub creating_ip: String,
    pub remember_me: bool,
}

/// Output contract for Login use case.
pub enum LoginOutput {
    Session(IssueSessionOutput),
    MfaRequired { challenge: String },
}

/// Use case composing authentication, MFA branching, and session issuance.
pub struct Login {
    identity_repo: Arc<dyn IdentityRepository>,
    session_store: Arc<dyn SessionStore>,
    mfa_engine: Arc<dyn MfaEngineService>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
    authenticate_user: AuthenticateUser,
    issue_session: IssueSession,
}

impl Login {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        session_store: Arc<dyn SessionStore>,
        mfa_engine: Arc<dyn MfaEngineService>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
        authenticate_user: AuthenticateUser,
        issue_session: IssueSession,
    ) -> Self {
        Self {
            identity_repo,
            session_store,
            mfa_engine,
            audit_log,
            event_bus,
            clock,
            authenticate_user,
            issue_session,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let now = self.clock.now().to_rfc3339();
        let rate_limit_key = format!("{RATE_LIMIT_SCOPE}:{}", input.identifier);
        let decision = self
            .session_store
            .check_rate_limit(&rate_limit_key, &now, RATE_LIMIT_COUNT, RATE_LIMIT_WINDOW_SECS)
            .await?;
        if let crate::core::session::RateLimitDecision::Deny { retry_after_secs } = decision {
            self.audit_log
                .append(AuthEvent::new(new_uuid(), "login.rate_limited", &now, &input.identifier))
                .await?;
            return Err(CoreError::rate_limited(RATE_LIMIT_SCOPE, retry_after_secs));
        }

        let authenticated = self
            .authenticate_user
            .execute(AuthenticateUserInput {
                identifier: input.identifier.clone(),
                password: input.password,
            })
            .await;

        let authenticated = match authenticated {
            Ok(authenticated) => authenticated,
            Err(err) => {
                self.audit_log
                    .append(AuthEvent::new(new_uuid(), "login.failed", &now, &input.identifier))
                    .await?;
                return Err(err);
            }
        };

        if !authenticated.principal.can_authenticate() {
            return Err(AuthenticationError::account_locked("account is suspended or deactivated").into());
        }

        let roles = self.identity_repo.roles_for(&authenticated.user.id).await?;
        let persistence = if input.remember_me {
            SessionPersistence::Persistent
        } else {
            SessionPersistence::Ephemeral
        };

        if authenticated.principal.mfa_enabled {
            let challenge = self.mfa_engine.issue_challenge(&authenticated.user.id).await?;
            return Ok(LoginOutput::MfaRequired { challenge: challenge.token });
        }

        let issued = self
            .issue_session
            .execute(IssueSessionInput {
                user_id: authenticated.user.id.clone(),
                roles: roles.as_slice().to_vec(),
                acct_ids: Vec::new(),
                mfa_verified: false,
                device_fingerprint: input.device_fingerprint,
                creating_ip: input.creating_ip,
                persistence,
            })
            .await?;

        self.audit_log
            .append(AuthEvent::new(new_uuid(), "login.success", &now, &authenticated.user.id))
            .await?;
        self.event_bus
            .publish(DomainEvent::new(new_uuid(), "login.success", &now).with_subject(&authenticated.user.id))
            .await;

        Ok(LoginOutput::Session(issued))
    }
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
