//! Ports for the broker-credential vault and the key-management service
//! it wraps data keys through.

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::vault::VaultRef;

/// Contract for envelope-encrypted secret storage.
#[async_trait]
pub trait Vault: Send + Sync {
	/// Encrypt `plaintext` under a fresh data key (itself wrapped by the
	/// KMS) and store the envelope, returning a reference to it.
	async fn store(&self, owner: &str, label: &str, plaintext: &[u8]) -> Result<VaultRef, CoreError>;

	/// Unwrap the data key via KMS and decrypt the referenced envelope.
	/// A decrypt failure of already-fetched ciphertext is reported as
	/// `CoreError::Internal` and logged at error severity by the caller;
	/// from the caller's perspective the secret is simply unavailable.
	async fn fetch(&self, vault_ref: &VaultRef) -> Result<Vec<u8>, CoreError>;

	/// Replace the plaintext behind an existing reference in place,
	/// re-wrapping with a new data key. The reference's identity is
	/// preserved so owners don't need to update their pointer.
	async fn rotate(&self, vault_ref: &VaultRef, new_plaintext: &[u8]) -> Result<(), CoreError>;

	/// Tombstone an envelope; its ciphertext is retained for audit but
	/// `fetch` must refuse to return it.
	async fn revoke(&self, vault_ref: &VaultRef) -> Result<(), CoreError>;
}

/// The minimal KMS contract the vault needs: wrap and unwrap a symmetric
/// data key under a master key the KMS holds. The vault never sees a
/// master key, only ever a wrapped data key.
#[async_trait]
pub trait KeyManagementService: Send + Sync {
	async fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Vec<u8>, CoreError>;
	async fn decrypt(&self, key_id: &str, ciphertext: &[u8]) -> Result<Vec<u8>, CoreError>;
}
