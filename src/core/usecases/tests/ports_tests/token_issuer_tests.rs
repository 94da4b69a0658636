//! Tests for TokenIssuer port.

use async_trait::async_trait;

use crate::core::error::{CoreError, TokenError};
use crate::core::identity::IdentityClaims;
use crate::core::token::{TokenClaims, TokenKind};
use crate::core::usecases::ports::{IssuedToken, TokenIssuer};

fn identity_claims() -> IdentityClaims {
    IdentityClaims {
        user_id: Some("user123".to_string()),
        workspace_id: None,
    }
}

struct MockTokenIssuer;

#[async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn mint(&self, claims: &TokenClaims) -> Result<IssuedToken, CoreError> {
        Ok(IssuedToken {
            compact: format!("{}.{}", claims.kind, claims.expires_at),
            kid: "kid-1".to_string(),
        })
    }

    async fn validate(&self, compact: &str) -> Result<TokenClaims, CoreError> {
        if compact.starts_with("access") {
            Ok(TokenClaims::new(identity_claims(), TokenKind::Access, "t0", "t1"))
        } else {
            Err(CoreError::Token(TokenError::malformed("invalid compact token")))
        }
    }
}

#[tokio::test]
async fn mint_embeds_kind_and_expiry() {
    let issuer = MockTokenIssuer;
    let claims = TokenClaims::new(identity_claims(), TokenKind::Access, "t0", "t1");
    let issued = issuer.mint(&claims).await.unwrap();
    assert_eq!(issued.compact, "access.t1");
}

#[tokio::test]
async fn validate_rejects_unrecognized_tokens() {
    let issuer = MockTokenIssuer;
    assert!(issuer.validate("garbage").await.is_err());
    assert!(issuer.validate("access.t1").await.is_ok());
}
