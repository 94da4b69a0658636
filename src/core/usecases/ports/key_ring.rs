//! Port for the asymmetric signing-key ring.
//!
//! Abstracts key material and the signing/verification operations the
//! TokenIssuer needs; key generation, storage, and rotation scheduling are
//! all adapter concerns (`crate::adapters::crypto::keyring`).

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::keyring::{JwksSnapshot, SigningKeyMeta};

/// Contract for the signing-key ring.
#[async_trait]
pub trait KeyRing: Send + Sync {
	/// The currently Active key's metadata and kid, used to sign new tokens.
	async fn current(&self) -> Result<SigningKeyMeta, CoreError>;

	/// Sign `payload` (a canonical JSON claims encoding) with the Active key.
	/// Returns the raw signature bytes; the caller assembles the envelope.
	async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CoreError>;

	/// Verify `signature` over `payload` using the key identified by `kid`.
	/// Fails with `CoreError::Token` if `kid` is unknown or past its grace
	/// window.
	async fn verify(&self, kid: &str, payload: &[u8], signature: &[u8]) -> Result<(), CoreError>;

	/// Generate a new key pair, promote it to Active, and demote the
	/// previous Active key to Retiring with a grace deadline.
	async fn rotate(&self) -> Result<SigningKeyMeta, CoreError>;

	/// The current JWKS view: Active key plus every Retiring key still
	/// within its grace window.
	async fn jwks(&self) -> Result<JwksSnapshot, CoreError>;
}
