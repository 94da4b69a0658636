//! Use case: AuthenticateUser
//!
//! Orchestrates user authentication by verifying identity, lockout status, and credentials.
//!
//! Responsibilities:
//! - Find user
//! - Check locked_until
//! - Verify password
//! - Reset or increment failed_attempts
//! - Enforce lockout policy
//! - Return domain identity
//!
//! Does NOT:
//! - Issue tokens
//! - Create sessions

use std::sync::Arc;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::{Principal, UserIdentity};
use crate::core::usecases::policies::LockoutPolicy;
use crate::core::usecases::ports::{Clock, CredentialRepository, IdentityRepository, PasswordHasher};

/// Input contract for AuthenticateUser use case.
pub struct AuthenticateUserInput {
    pub identifier: String,
    pub password: String,
}

/// Output contract for AuthenticateUser use case.
pub struct AuthenticateUserOutput {
    pub user: UserIdentity,
    pub principal: Principal,
}

/// Verifies a password against the stored credential and enforces the
/// lockout policy, never distinguishing "unknown identifier" from "wrong
/// password" in the error it returns — both surface identically so the
/// caller has no login oracle.
pub struct AuthenticateUser {
    identity_repo: Arc<dyn IdentityRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    lockout_policy: LockoutPolicy,
}

impl AuthenticateUser {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        lockout_policy: LockoutPolicy,
    ) -> Self {
        Self {
            identity_repo,
            credential_repo,
            password_hasher,
            clock,
            lockout_policy,
        }
    }

    pub async fn execute(&self, input: AuthenticateUserInput) -> Result<AuthenticateUserOutput, CoreError> {
        let invalid_credentials = || CoreError::from(AuthenticationError::user_not_found("invalid_credentials"));

        let user = self
            .identity_repo
            .find_by_identifier(&input.identifier)
            .await?
            .ok_or_else(invalid_credentials)?;

        let principal = self
            .identity_repo
            .find_principal(&user.id)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !principal.can_authenticate() {
            return Err(AuthenticationError::account_locked("account is suspended or deactivated").into());
        }

        if let Some(locked_until) = self.credential_repo.locked_until(&user.id).await? {
            if let Ok(locked_until) = chrono::DateTime::parse_from_rfc3339(&locked_until) {
                if self.clock.now() < locked_until {
                    return Err(AuthenticationError::account_locked("too many failed attempts").into());
                }
            }
        }

        let stored = self
            .credential_repo
            .get_by_user_id(&user.id)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.password_hasher.verify(&input.password, &stored) {
            self.credential_repo.update_failed_attempts(&user.id, 1).await?;
            if self.lockout_policy.is_locked(1) {
                let lock_until = self.clock.now() + chrono::Duration::seconds(self.lockout_policy.lock_duration() as i64);
                self.credential_repo.lock_until(&user.id, &lock_until.to_rfc3339()).await?;
            }
            return Err(invalid_credentials());
        }

        if self.lockout_policy.should_reset_on_success() {
            self.credential_repo.update_failed_attempts(&user.id, 0).await?;
        }

        Ok(AuthenticateUserOutput { user, principal })
    }
}
