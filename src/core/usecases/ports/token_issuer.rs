//! Port for minting and validating JWTs.
//!
//! The asymmetric signature itself is delegated to `KeyRing`, so this port
//! only owns claims encoding/decoding and the envelope
//! (`header.payload.signature`).

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::token::TokenClaims;

/// A signed token ready to hand to a client or peer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub compact: String,
    pub kid: String,
}

/// Contract for token issuance and validation.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
	/// Mint a token from claims, signed by the KeyRing's current Active key.
	async fn mint(&self, claims: &TokenClaims) -> Result<IssuedToken, CoreError>;

	/// Validate a compact token: check signature (via KeyRing, by `kid` in
	/// the header), expiry, not-before, issuer and audience, and return the
	/// embedded claims.
	async fn validate(&self, compact: &str) -> Result<TokenClaims, CoreError>;
}
