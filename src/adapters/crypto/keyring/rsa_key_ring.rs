//! In-memory RSA-2048/SHA-256 implementation of the `KeyRing` port.
//!
//! Keys never leave process memory in this adapter; a deployment that needs
//! keys to survive a restart would back `keys` with the vault instead.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::rand_core::OsRng;
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tokio::sync::RwLock;

use crate::core::error::{CoreError, InvariantError, TokenError};
use crate::core::keyring::{JwkDescriptor, JwksSnapshot, KeyAlgorithm, KeyStatus, SigningKeyMeta};
use crate::core::usecases::ports::KeyRing;

const RSA_KEY_BITS: usize = 2048;
const ROTATION_GRACE_SECS: i64 = 24 * 60 * 60;

struct KeyEntry {
    meta: SigningKeyMeta,
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

pub struct RsaKeyRing {
    keys: RwLock<Vec<KeyEntry>>,
}

impl RsaKeyRing {
    /// Generate the ring's first Active key.
    pub async fn new() -> Result<Self, CoreError> {
        let entry = generate_entry()?;
        Ok(Self {
            keys: RwLock::new(vec![entry]),
        })
    }

    fn new_kid() -> String {
        uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
    }
}

fn generate_entry() -> Result<KeyEntry, CoreError> {
    let private = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS).map_err(|e| {
        CoreError::from(InvariantError::dependency_unavailable("keyring", e.to_string()))
    })?;
    let public = RsaPublicKey::from(&private);
    let meta = SigningKeyMeta::new_active(
        RsaKeyRing::new_kid(),
        KeyAlgorithm::Rsa2048Sha256,
        Utc::now().to_rfc3339(),
    );
    Ok(KeyEntry { meta, private, public })
}

/// Demote any `Retiring` entry whose grace window has passed to `Retired`.
fn sweep_expired(keys: &mut [KeyEntry]) {
    let now = Utc::now();
    for entry in keys.iter_mut() {
        if entry.meta.status == KeyStatus::Retiring {
            let past_deadline = entry
                .meta
                .not_after
                .as_deref()
                .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
                .map(|deadline| now > deadline)
                .unwrap_or(false);
            if past_deadline {
                entry.meta = entry.meta.retired();
            }
        }
    }
}

fn rsa_public_params(public: &RsaPublicKey) -> String {
    let n = URL_SAFE_NO_PAD.encode(public.n().to_bytes_be());
    let e = URL_SAFE_NO_PAD.encode(public.e().to_bytes_be());
    format!("{{\"n\":\"{}\",\"e\":\"{}\"}}", n, e)
}

#[async_trait]
impl KeyRing for RsaKeyRing {
    async fn current(&self) -> Result<SigningKeyMeta, CoreError> {
        let mut keys = self.keys.write().await;
        sweep_expired(&mut keys);
        keys.iter()
            .find(|e| e.meta.status == KeyStatus::Active)
            .map(|e| e.meta.clone())
            .ok_or_else(|| CoreError::from(InvariantError::inconsistent_state("no active signing key")))
    }

    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CoreError> {
        let mut keys = self.keys.write().await;
        sweep_expired(&mut keys);
        let entry = keys
            .iter()
            .find(|e| e.meta.status == KeyStatus::Active)
            .ok_or_else(|| CoreError::from(InvariantError::inconsistent_state("no active signing key")))?;
        let signing_key = SigningKey::<Sha256>::new(entry.private.clone());
        let signature = signing_key.sign_with_rng(&mut OsRng, payload);
        Ok(signature.to_vec())
    }

    async fn verify(&self, kid: &str, payload: &[u8], signature: &[u8]) -> Result<(), CoreError> {
        let mut keys = self.keys.write().await;
        sweep_expired(&mut keys);
        let entry = keys
            .iter()
            .find(|e| e.meta.kid == kid)
            .ok_or_else(|| CoreError::from(TokenError::key_id_not_found(kid)))?;
        if entry.meta.status == KeyStatus::Retired {
            return Err(CoreError::from(TokenError::key_id_not_found(kid)));
        }
        let verifying_key = VerifyingKey::<Sha256>::new(entry.public.clone());
        let sig = Signature::try_from(signature)
            .map_err(|_| CoreError::from(TokenError::signature_invalid("not a valid PKCS#1v1.5 signature")))?;
        verifying_key
            .verify(payload, &sig)
            .map_err(|_| CoreError::from(TokenError::signature_invalid("rsa verification failed")))
    }

    async fn rotate(&self) -> Result<SigningKeyMeta, CoreError> {
        let new_entry = generate_entry()?;
        let grace_deadline = (Utc::now() + Duration::seconds(ROTATION_GRACE_SECS)).to_rfc3339();

        let mut keys = self.keys.write().await;
        sweep_expired(&mut keys);
        for entry in keys.iter_mut() {
            if entry.meta.status == KeyStatus::Active {
                entry.meta = entry.meta.retiring(grace_deadline.clone());
            }
        }
        let meta = new_entry.meta.clone();
        keys.push(new_entry);
        Ok(meta)
    }

    async fn jwks(&self) -> Result<JwksSnapshot, CoreError> {
        let mut keys = self.keys.write().await;
        sweep_expired(&mut keys);
        let descriptors = keys
            .iter()
            .filter(|e| e.meta.belongs_in_jwks())
            .map(|e| JwkDescriptor::from_meta(&e.meta, rsa_public_params(&e.public)))
            .collect();
        Ok(JwksSnapshot::new(descriptors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signs_and_verifies_round_trip() {
        let ring = RsaKeyRing::new().await.expect("key generation");
        let meta = ring.current().await.expect("current key");
        let payload = b"header.payload";
        let signature = ring.sign(payload).await.expect("sign");
        ring.verify(&meta.kid, payload, &signature).await.expect("verify");
    }

    #[tokio::test]
    async fn verify_rejects_tampered_payload() {
        let ring = RsaKeyRing::new().await.expect("key generation");
        let meta = ring.current().await.expect("current key");
        let signature = ring.sign(b"original").await.expect("sign");
        let result = ring.verify(&meta.kid, b"tampered", &signature).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rotate_keeps_previous_key_verifiable_during_grace() {
        let ring = RsaKeyRing::new().await.expect("key generation");
        let old_meta = ring.current().await.expect("current key");
        let payload = b"still-in-flight";
        let signature = ring.sign(payload).await.expect("sign");

        let new_meta = ring.rotate().await.expect("rotate");
        assert_ne!(old_meta.kid, new_meta.kid);

        ring.verify(&old_meta.kid, payload, &signature)
            .await
            .expect("retiring key still verifies within grace window");

        let jwks = ring.jwks().await.expect("jwks");
        assert!(jwks.find(&old_meta.kid).is_some());
        assert!(jwks.find(&new_meta.kid).is_some());
    }
}
