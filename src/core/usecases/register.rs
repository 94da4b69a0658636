//! Use case: RegisterUser
//!
//! Orchestrates first-time account creation.
//!
//! Responsibilities:
//! - Validate email format and password strength
//! - Check email uniqueness (case-folded)
//! - Hash the password and create the principal in `PendingVerification`
//! - Assign the default `user` role
//! - AuditLog + EventBus `user.registered`
//!
//! Does NOT:
//! - Send the verification email itself (an external collaborator's job)
//! - Issue a session (the caller logs in separately once verified, or
//!   immediately if the deployment allows unverified login)

use std::sync::Arc;

use crate::core::audit::AuthEvent;
use crate::core::error::{CoreError, CredentialError};
use crate::core::event::DomainEvent;
use crate::core::identity::RoleSet;
use crate::core::usecases::ports::{
    AuditLog, Clock, CredentialRepository, EventBus, IdentityRepository, PasswordHasher,
};

const DEFAULT_ROLE: &str = "user";

/// Input contract for RegisterUser use case.
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Output contract for RegisterUser use case.
pub struct RegisterUserOutput {
    pub user_id: String,
}

/// Use case for registering a brand new principal.
pub struct RegisterUser {
    identity_repo: Arc<dyn IdentityRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    audit_log: Arc<dyn AuditLog>,
    event_bus: Arc<dyn EventBus>,
    clock: Arc<dyn Clock>,
}

impl RegisterUser {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        audit_log: Arc<dyn AuditLog>,
        event_bus: Arc<dyn EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identity_repo,
            credential_repo,
            password_hasher,
            audit_log,
            event_bus,
            clock,
        }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> Result<RegisterUserOutput, CoreError> {
        let email = input.email.trim().to_lowercase();
        if !is_plausible_email(&email) {
            return Err(CredentialError::invalid_format("email", "not a well-formed address").into());
        }

        if !self.password_hasher.meets_strength_bar(&input.password) {
            return Err(CredentialError::insufficient_strength("password does not meet the minimum strength bar").into());
        }

        if self.identity_repo.find_by_identifier(&email).await?.is_some() {
            return Err(CoreError::conflict("an account with this email already exists"));
        }

        let user_id = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let stored = self.password_hasher.hash(&input.password);

        self.identity_repo
            .create(&user_id, &email, stored.as_hash_str(), "", "argon2id", 0)
            .await?;
        self.credential_repo.initialize_credential_state(&user_id.to_string()).await?;
        self.identity_repo
            .save_roles(&user_id.to_string(), &RoleSet::new(vec![DEFAULT_ROLE.to_string()]))
            .await?;

        let now = self.clock.now().to_rfc3339();
        let event_id = new_uuid();
        self.audit_log
            .append(AuthEvent::new(event_id.clone(), "user.registered", &now, user_id.to_string()))
            .await?;
        self.event_bus
            .publish(DomainEvent::new(event_id, "user.registered", &now).with_subject(user_id.to_string()))
            .await;

        Ok(RegisterUserOutput {
            user_id: user_id.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
