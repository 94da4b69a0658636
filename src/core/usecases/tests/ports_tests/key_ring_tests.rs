use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::keyring::{JwkDescriptor, JwksSnapshot, KeyAlgorithm, SigningKeyMeta};
use crate::core::usecases::ports::KeyRing;

struct FixedKeyRing {
    active: SigningKeyMeta,
}

#[async_trait]
impl KeyRing for FixedKeyRing {
    async fn current(&self) -> Result<SigningKeyMeta, CoreError> {
        Ok(self.active.clone())
    }

    async fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CoreError> {
        Ok(payload.to_vec())
    }

    async fn verify(&self, kid: &str, _payload: &[u8], _signature: &[u8]) -> Result<(), CoreError> {
        if kid == self.active.kid {
            Ok(())
        } else {
            Err(CoreError::not_found("signing_key", kid))
        }
    }

    async fn rotate(&self) -> Result<SigningKeyMeta, CoreError> {
        Ok(SigningKeyMeta::new_active("kid-2", KeyAlgorithm::EcP256Sha256, "t1"))
    }

    async fn jwks(&self) -> Result<JwksSnapshot, CoreError> {
        Ok(JwksSnapshot::new(vec![JwkDescriptor::from_meta(&self.active, "params")]))
    }
}

fn key_ring() -> FixedKeyRing {
    FixedKeyRing {
        active: SigningKeyMeta::new_active("kid-1", KeyAlgorithm::Rsa2048Sha256, "t0"),
    }
}

#[tokio::test]
async fn verify_rejects_unknown_kid() {
    let ring = key_ring();
    assert!(ring.verify("kid-1", b"payload", b"sig").await.is_ok());
    assert!(ring.verify("kid-unknown", b"payload", b"sig").await.is_err());
}

#[tokio::test]
async fn jwks_contains_the_active_key() {
    let ring = key_ring();
    let jwks = ring.jwks().await.unwrap();
    assert!(jwks.find("kid-1").is_some());
}
