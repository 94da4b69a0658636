//! Use cases: BeginMfaEnrollment, ConfirmMfaEnrollment, DisableMfa
//!
//! Thin orchestration over `MfaEngineService` that additionally keeps the
//! principal's `mfa_enabled` flag in sync, since the engine itself only
//! tracks enrollment state, not the flag `Login` branches on.

use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::usecases::ports::{IdentityRepository, MfaEnrollment, MfaEngineService};

pub struct MfaEnrollmentFlow {
    identity_repo: Arc<dyn IdentityRepository>,
    mfa_engine: Arc<dyn MfaEngineService>,
}

impl MfaEnrollmentFlow {
    pub fn new(identity_repo: Arc<dyn IdentityRepository>, mfa_engine: Arc<dyn MfaEngineService>) -> Self {
        Self { identity_repo, mfa_engine }
    }

    pub async fn begin(&self, user_id: &str) -> Result<MfaEnrollment, CoreError> {
        self.mfa_engine.begin_enrollment(user_id).await
    }

    pub async fn confirm(&self, user_id: &str, code: &str) -> Result<(), CoreError> {
        self.mfa_engine.confirm_enrollment(user_id, code).await?;

        if let Some(mut principal) = self.identity_repo.find_principal(user_id).await? {
            principal.mfa_enabled = true;
            self.identity_repo.save_principal(&principal).await?;
        }
        Ok(())
    }

    pub async fn disable(&self, user_id: &str) -> Result<(), CoreError> {
        self.mfa_engine.disable(user_id).await?;

        if let Some(mut principal) = self.identity_repo.find_principal(user_id).await? {
            principal.mfa_enabled = false;
            self.identity_repo.save_principal(&principal).await?;
        }
        Ok(())
    }
}
