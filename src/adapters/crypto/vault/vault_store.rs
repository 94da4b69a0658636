//! Envelope-encryption implementation of the `Vault` port.
//!
//! Algorithm per secret: generate a random 256-bit data key, encrypt the
//! plaintext under it with AES-256-GCM, wrap the data key with the KMS,
//! and store `(nonce, wrapped_data_key, ciphertext)`. `fetch` reverses the
//! steps; the plaintext data key never leaves this function's stack.

use std::sync::Arc;

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::error::{CoreError, VaultError};
use crate::core::usecases::ports::{KeyManagementService, Vault};
use crate::core::vault::{SecretEnvelope, VaultRef};

const NONCE_LEN: usize = 12;

pub struct EnvelopeVault {
    kms: Arc<dyn KeyManagementService>,
    kms_key_id: String,
    envelopes: DashMap<String, SecretEnvelope>,
}

impl EnvelopeVault {
    pub fn new(kms: Arc<dyn KeyManagementService>, kms_key_id: impl Into<String>) -> Self {
        Self {
            kms,
            kms_key_id: kms_key_id.into(),
            envelopes: DashMap::new(),
        }
    }

    fn new_ref() -> VaultRef {
        VaultRef::new(uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string())
    }
}

#[async_trait]
impl Vault for EnvelopeVault {
    async fn store(&self, owner: &str, label: &str, plaintext: &[u8]) -> Result<VaultRef, CoreError> {
        let data_key = Aes256Gcm::generate_key(&mut OsRng);
        let cipher = Aes256Gcm::new(&data_key);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CoreError::from(VaultError::kms_unavailable("data-key encryption failed")))?;
        let wrapped_data_key = self.kms.encrypt(&self.kms_key_id, &data_key).await?;

        let envelope = SecretEnvelope::new(
            owner,
            label,
            self.kms_key_id.clone(),
            nonce.to_vec(),
            wrapped_data_key,
            ciphertext,
        );
        let vault_ref = Self::new_ref();
        self.envelopes.insert(vault_ref.id().to_string(), envelope);
        Ok(vault_ref)
    }

    async fn fetch(&self, vault_ref: &VaultRef) -> Result<Vec<u8>, CoreError> {
        let envelope = self
            .envelopes
            .get(vault_ref.id())
            .ok_or_else(|| CoreError::from(VaultError::not_found(vault_ref.id())))?;
        if envelope.tombstoned {
            return Err(CoreError::from(VaultError::not_found(vault_ref.id())));
        }

        let data_key_bytes = self
            .kms
            .decrypt(&envelope.kms_key_id, &envelope.wrapped_data_key)
            .await?;
        let data_key = Key::<Aes256Gcm>::from_slice(&data_key_bytes);
        let cipher = Aes256Gcm::new(data_key);
        let nonce = Nonce::from_slice(&envelope.nonce);
        cipher
            .decrypt(nonce, envelope.ciphertext.as_slice())
            .map_err(|_| CoreError::from(VaultError::decrypt_failed(vault_ref.id())))
    }

    async fn rotate(&self, vault_ref: &VaultRef, new_plaintext: &[u8]) -> Result<(), CoreError> {
        let (owner, label) = {
            let envelope = self
                .envelopes
                .get(vault_ref.id())
                .ok_or_else(|| CoreError::from(VaultError::not_found(vault_ref.id())))?;
            (envelope.owner.clone(), envelope.label.clone())
        };

        let data_key = Aes256Gcm::generate_key(&mut OsRng);
        let cipher = Aes256Gcm::new(&data_key);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, new_plaintext)
            .map_err(|_| CoreError::from(VaultError::kms_unavailable("data-key encryption failed")))?;
        let wrapped_data_key = self.kms.encrypt(&self.kms_key_id, &data_key).await?;

        let envelope = SecretEnvelope::new(
            owner,
            label,
            self.kms_key_id.clone(),
            nonce.to_vec(),
            wrapped_data_key,
            ciphertext,
        );
        self.envelopes.insert(vault_ref.id().to_string(), envelope);
        Ok(())
    }

    async fn revoke(&self, vault_ref: &VaultRef) -> Result<(), CoreError> {
        let mut envelope = self
            .envelopes
            .get_mut(vault_ref.id())
            .ok_or_else(|| CoreError::from(VaultError::not_found(vault_ref.id())))?;
        *envelope = envelope.tombstone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::crypto::vault::LocalKms;

    fn vault() -> EnvelopeVault {
        EnvelopeVault::new(Arc::new(LocalKms::new()), "test-master-key")
    }

    #[tokio::test]
    async fn stores_and_fetches_a_secret() {
        let vault = vault();
        let vault_ref = vault.store("user-1", "totp_secret", b"hunter2").await.expect("store");
        let fetched = vault.fetch(&vault_ref).await.expect("fetch");
        assert_eq!(fetched, b"hunter2");
    }

    #[tokio::test]
    async fn revoked_secret_cannot_be_fetched() {
        let vault = vault();
        let vault_ref = vault.store("user-1", "totp_secret", b"hunter2").await.expect("store");
        vault.revoke(&vault_ref).await.expect("revoke");
        let result = vault.fetch(&vault_ref).await;
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn rotate_replaces_plaintext_in_place() {
        let vault = vault();
        let vault_ref = vault.store("user-1", "totp_secret", b"old").await.expect("store");
        vault.rotate(&vault_ref, b"new").await.expect("rotate");
        let fetched = vault.fetch(&vault_ref).await.expect("fetch");
        assert_eq!(fetched, b"new");
    }
}
