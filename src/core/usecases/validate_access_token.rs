//! Use case: ValidateAccessToken
//!
//! Orchestrates access token validation and domain error mapping.
//!
//! Responsibilities:
//! - Delegate signature, expiry, and audience checks to TokenIssuer
//! - Reject tokens that are not of the Access kind
//!
//! Validation is stateless: it never consults SessionStore. A session torn
//! down by revocation or reuse-detection does not invalidate access tokens
//! already issued from it before their `exp` — this is documented, accepted
//! behavior, not a bug.

use std::sync::Arc;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::token::{TokenClaims, TokenKind};
use crate::core::usecases::ports::TokenIssuer;

/// Input contract for ValidateAccessToken use case.
pub struct ValidateAccessTokenInput {
    pub access_token: String,
}

/// Output contract for ValidateAccessToken use case.
pub struct ValidateAccessTokenOutput {
    pub claims: TokenClaims,
}

pub struct ValidateAccessToken {
    token_issuer: Arc<dyn TokenIssuer>,
}

impl ValidateAccessToken {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { token_issuer }
    }

    pub async fn execute(&self, input: ValidateAccessTokenInput) -> Result<ValidateAccessTokenOutput, CoreError> {
        let claims = self.token_issuer.validate(&input.access_token).await?;

        if claims.kind != TokenKind::Access {
            return Err(AuthenticationError::unsupported_auth_method("expected an access token").into());
        }

        Ok(ValidateAccessTokenOutput { claims })
    }
}
