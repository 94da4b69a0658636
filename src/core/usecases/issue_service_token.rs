//! Use case: IssueServiceToken / ValidateServiceToken
//!
//! First-party, service-to-service tokens minted under a client-credentials
//! flow; no session, no refresh, no user identity — just a workspace-scoped
//! `TokenKind::Service` claim set with a short, fixed TTL.

use std::sync::Arc;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::IdentityClaims;
use crate::core::token::{TokenClaims, TokenKind};
use crate::core::usecases::ports::{Clock, IssuedToken, TokenIssuer};

const SERVICE_TOKEN_TTL_SECS: u64 = 5 * 60;

/// Input contract for IssueServiceToken use case.
pub struct IssueServiceTokenInput {
    pub service_id: String,
    pub scopes: Vec<String>,
}

pub struct IssueServiceToken {
    token_issuer: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl IssueServiceToken {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>, clock: Arc<dyn Clock>) -> Self {
        Self { token_issuer, clock }
    }

    pub async fn execute(&self, input: IssueServiceTokenInput) -> Result<IssuedToken, CoreError> {
        let now = self.clock.now();
        let now_str = now.to_rfc3339();
        let expires_at = (now + chrono::Duration::seconds(SERVICE_TOKEN_TTL_SECS as i64)).to_rfc3339();

        let identity = IdentityClaims {
            user_id: Some(input.service_id),
            workspace_id: None,
        };
        let claims = TokenClaims::new(identity, TokenKind::Service, &now_str, expires_at).with_scopes(input.scopes);

        self.token_issuer.mint(&claims).await
    }
}

/// Validates a compact service token and rejects anything not minted as
/// `TokenKind::Service` (an access or refresh token presented here is a
/// misuse, not a valid service call).
pub struct ValidateServiceToken {
    token_issuer: Arc<dyn TokenIssuer>,
}

impl ValidateServiceToken {
    pub fn new(token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { token_issuer }
    }

    pub async fn execute(&self, compact: &str) -> Result<TokenClaims, CoreError> {
        let claims = self.token_issuer.validate(compact).await?;
        if claims.kind != TokenKind::Service {
            return Err(AuthenticationError::unsupported_auth_method("expected a service token").into());
        }
        Ok(claims)
    }
}
