//! Use case: RequestPasswordReset
//!
//! Generates a random reset token, stores its hash with a 30-minute TTL,
//! and leaves delivery to an external collaborator. Always reports success
//! regardless of whether the identifier resolves to an account, so the
//! caller has no account-enumeration oracle.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::core::error::CoreError;
use crate::core::usecases::ports::{CredentialRepository, IdentityRepository};

const RESET_TOKEN_TTL_SECS: u64 = 30 * 60;
const RESET_TOKEN_BYTES: usize = 32;

/// Input contract for RequestPasswordReset use case.
pub struct RequestPasswordResetInput {
    pub identifier: String,
}

/// Output contract for RequestPasswordReset use case. `reset_token` is
/// `None` when the identifier did not resolve; callers must still report
/// success uniformly and only the email-delivery collaborator sees this.
pub struct RequestPasswordResetOutput {
    pub reset_token: Option<String>,
}

pub struct RequestPasswordReset {
    identity_repo: Arc<dyn IdentityRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
}

impl RequestPasswordReset {
    pub fn new(identity_repo: Arc<dyn IdentityRepository>, credential_repo: Arc<dyn CredentialRepository>) -> Self {
        Self {
            identity_repo,
            credential_repo,
        }
    }

    pub async fn execute(&self, input: RequestPasswordResetInput) -> Result<RequestPasswordResetOutput, CoreError> {
        let identifier = input.identifier.trim().to_lowercase();
        let user = self.identity_repo.find_by_identifier(&identifier).await?;

        let Some(user) = user else {
            return Ok(RequestPasswordResetOutput { reset_token: None });
        };

        let token = generate_reset_token();
        let token_hash = hash_token(&token);
        self.credential_repo
            .store_reset_token(&token_hash, &user.id, RESET_TOKEN_TTL_SECS)
            .await?;

        Ok(RequestPasswordResetOutput { reset_token: Some(token) })
    }
}

fn generate_reset_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    data_encoding::BASE64URL_NOPAD.encode(&bytes)
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
