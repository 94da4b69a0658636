//! Local-master-key stand-in for a production key-management service.
//!
//! Each `key_id` lazily gets its own 256-bit master key, generated
//! in-process and held only in memory. A production deployment swaps this
//! adapter for one backed by a cloud KMS without touching `EnvelopeVault`
//! at all — the two are wired together only through `KeyManagementService`.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::error::{CoreError, VaultError};
use crate::core::usecases::ports::KeyManagementService;

const NONCE_LEN: usize = 12;

pub struct LocalKms {
    master_keys: DashMap<String, Key<Aes256Gcm>>,
}

impl LocalKms {
    pub fn new() -> Self {
        Self {
            master_keys: DashMap::new(),
        }
    }

    fn master_key(&self, key_id: &str) -> Key<Aes256Gcm> {
        self.master_keys
            .entry(key_id.to_string())
            .or_insert_with(|| Aes256Gcm::generate_key(&mut OsRng))
            .clone()
    }
}

impl Default for LocalKms {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyManagementService for LocalKms {
    async fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Vec<u8>, CoreError> {
        let master = self.master_key(key_id);
        let cipher = Aes256Gcm::new(&master);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CoreError::from(VaultError::kms_unavailable("master-key wrap failed")))?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    async fn decrypt(&self, key_id: &str, ciphertext: &[u8]) -> Result<Vec<u8>, CoreError> {
        if ciphertext.len() < NONCE_LEN {
            return Err(CoreError::from(VaultError::kms_unavailable(
                "wrapped key is shorter than one nonce",
            )));
        }
        let master = self.master_key(key_id);
        let cipher = Aes256Gcm::new(&master);
        let (nonce_bytes, body) = ciphertext.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);
        cipher
            .decrypt(nonce, body)
            .map_err(|_| CoreError::from(VaultError::kms_unavailable("master-key unwrap failed")))
    }
}
