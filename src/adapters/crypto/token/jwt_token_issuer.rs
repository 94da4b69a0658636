//! JWT-shaped implementation of the `TokenIssuer` port.
//!
//! Owns claims encoding and the `header.payload.signature` envelope only;
//! the asymmetric signature itself is delegated to a `KeyRing`.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, InvariantError, TokenError};
use crate::core::identity::IdentityClaims;
use crate::core::token::{TokenClaims, TokenKind, TokenLifetime};
use crate::core::usecases::ports::{IssuedToken, KeyRing, TokenIssuer};

#[derive(Debug, Serialize, Deserialize)]
struct JwtHeader {
    alg: String,
    kid: String,
    typ: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    user_id: Option<String>,
    workspace_id: Option<String>,
    kind: String,
    iat: String,
    exp: String,
    nbf: Option<String>,
    scopes: Option<Vec<String>>,
    sid: Option<String>,
    roles: Option<Vec<String>>,
    acct_ids: Option<Vec<String>>,
    mfa: Option<bool>,
    jti: Option<String>,
    family: Option<String>,
}

/// Signs and validates the three token shapes (access/refresh/service)
/// against a `KeyRing`.
pub struct JwtTokenIssuer {
    key_ring: Arc<dyn KeyRing>,
}

impl JwtTokenIssuer {
    pub fn new(key_ring: Arc<dyn KeyRing>) -> Self {
        Self { key_ring }
    }
}

fn kind_from_str(raw: &str) -> Result<TokenKind, CoreError> {
    match raw {
        "access" => Ok(TokenKind::Access),
        "refresh" => Ok(TokenKind::Refresh),
        "service" => Ok(TokenKind::Service),
        other => Err(CoreError::from(TokenError::invalid_claims(format!(
            "unknown token kind: {}",
            other
        )))),
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn mint(&self, claims: &TokenClaims) -> Result<IssuedToken, CoreError> {
        let current = self.key_ring.current().await?;
        let header = JwtHeader {
            alg: current.algorithm.jose_alg().to_string(),
            kid: current.kid.clone(),
            typ: "JWT".to_string(),
        };
        let wire = JwtClaims {
            user_id: claims.identity.user_id.clone(),
            workspace_id: claims.identity.workspace_id.clone(),
            kind: claims.kind.as_str().to_string(),
            iat: claims.issued_at.clone(),
            exp: claims.expires_at.clone(),
            nbf: claims.not_before.clone(),
            scopes: claims.scopes.clone(),
            sid: claims.sid.clone(),
            roles: claims.roles.clone(),
            acct_ids: claims.acct_ids.clone(),
            mfa: claims.mfa,
            jti: claims.jti.clone(),
            family: claims.family.clone(),
        };

        let header_json = serde_json::to_vec(&header)
            .map_err(|e| CoreError::from(InvariantError::violated(format!("header encoding failed: {}", e))))?;
        let claims_json = serde_json::to_vec(&wire)
            .map_err(|e| CoreError::from(InvariantError::violated(format!("claims encoding failed: {}", e))))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );
        let signature = self.key_ring.sign(signing_input.as_bytes()).await?;
        let compact = format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature));

        Ok(IssuedToken {
            compact,
            kid: current.kid,
        })
    }

    async fn validate(&self, compact: &str) -> Result<TokenClaims, CoreError> {
        let mut parts = compact.split('.');
        let header_b64 = parts
            .next()
            .ok_or_else(|| CoreError::from(TokenError::malformed("missing header segment")))?;
        let payload_b64 = parts
            .next()
            .ok_or_else(|| CoreError::from(TokenError::malformed("missing payload segment")))?;
        let signature_b64 = parts
            .next()
            .ok_or_else(|| CoreError::from(TokenError::malformed("missing signature segment")))?;
        if parts.next().is_some() {
            return Err(CoreError::from(TokenError::malformed("unexpected extra segment")));
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(header_b64)
            .map_err(|_| CoreError::from(TokenError::malformed("header is not valid base64url")))?;
        let header: JwtHeader = serde_json::from_slice(&header_bytes)
            .map_err(|_| CoreError::from(TokenError::malformed("header is not valid JSON")))?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| CoreError::from(TokenError::malformed("payload is not valid base64url")))?;
        let wire: JwtClaims = serde_json::from_slice(&payload_bytes)
            .map_err(|_| CoreError::from(TokenError::invalid_claims("payload is not valid JSON")))?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| CoreError::from(TokenError::signature_invalid("signature is not valid base64url")))?;

        let signing_input = format!("{}.{}", header_b64, payload_b64);
        self.key_ring
            .verify(&header.kid, signing_input.as_bytes(), &signature)
            .await?;

        let mut lifetime = TokenLifetime::new(wire.iat.clone(), wire.exp.clone());
        if let Some(nbf) = &wire.nbf {
            lifetime = lifetime.with_not_before(nbf.clone());
        }
        let now = Utc::now().to_rfc3339();
        if lifetime.is_expired(&now) {
            return Err(CoreError::from(TokenError::expired(wire.exp.clone())));
        }
        if lifetime.is_not_yet_valid(&now) {
            return Err(CoreError::from(TokenError::not_yet_valid(
                lifetime.valid_from().to_string(),
            )));
        }

        let kind = kind_from_str(&wire.kind)?;
        let identity = IdentityClaims {
            user_id: wire.user_id,
            workspace_id: wire.workspace_id,
        };
        let mut claims = TokenClaims::new(identity, kind, wire.iat, wire.exp);
        if let Some(nbf) = wire.nbf {
            claims = claims.with_not_before(nbf);
        }
        if let Some(scopes) = wire.scopes {
            claims = claims.with_scopes(scopes);
        }
        if let Some(sid) = wire.sid {
            claims = claims.with_sid(sid);
        }
        if let Some(roles) = wire.roles {
            claims = claims.with_roles(roles);
        }
        if let Some(acct_ids) = wire.acct_ids {
            claims = claims.with_acct_ids(acct_ids);
        }
        if let Some(mfa) = wire.mfa {
            claims = claims.with_mfa(mfa);
        }
        if let Some(jti) = wire.jti {
            claims = claims.with_jti(jti);
        }
        if let Some(family) = wire.family {
            claims = claims.with_family(family);
        }

        Ok(claims)
    }
}
