use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::usecases::ports::Vault;
use crate::core::vault::VaultRef;

struct InMemoryVault {
    secrets: Mutex<HashMap<String, Vec<u8>>>,
    revoked: Mutex<Vec<String>>,
}

#[async_trait]
impl Vault for InMemoryVault {
    async fn store(&self, owner: &str, label: &str, plaintext: &[u8]) -> Result<VaultRef, CoreError> {
        let vault_ref = VaultRef::new(format!("{}-{}", owner, label));
        self.secrets.lock().unwrap().insert(vault_ref.id().to_string(), plaintext.to_vec());
        Ok(vault_ref)
    }

    async fn fetch(&self, vault_ref: &VaultRef) -> Result<Vec<u8>, CoreError> {
        if self.revoked.lock().unwrap().contains(&vault_ref.id().to_string()) {
            return Err(CoreError::not_found("vault_secret", vault_ref.id()));
        }
        self.secrets
            .lock()
            .unwrap()
            .get(vault_ref.id())
            .cloned()
            .ok_or_else(|| CoreError::not_found("vault_secret", vault_ref.id()))
    }

    async fn rotate(&self, vault_ref: &VaultRef, new_plaintext: &[u8]) -> Result<(), CoreError> {
        self.secrets.lock().unwrap().insert(vault_ref.id().to_string(), new_plaintext.to_vec());
        Ok(())
    }

    async fn revoke(&self, vault_ref: &VaultRef) -> Result<(), CoreError> {
        self.revoked.lock().unwrap().push(vault_ref.id().to_string());
        Ok(())
    }
}

fn vault() -> InMemoryVault {
    InMemoryVault {
        secrets: Mutex::new(HashMap::new()),
        revoked: Mutex::new(Vec::new()),
    }
}

#[tokio::test]
async fn store_then_fetch_roundtrips_plaintext() {
    let vault = vault();
    let vault_ref = vault.store("user-1", "broker_api_key", b"secret-value").await.unwrap();
    assert_eq!(vault.fetch(&vault_ref).await.unwrap(), b"secret-value");
}

#[tokio::test]
async fn revoked_reference_refuses_to_fetch() {
    let vault = vault();
    let vault_ref = vault.store("user-1", "broker_api_key", b"secret-value").await.unwrap();
    vault.revoke(&vault_ref).await.unwrap();
    assert!(vault.fetch(&vault_ref).await.is_err());
}

#[tokio::test]
async fn rotate_replaces_plaintext_in_place() {
    let vault = vault();
    let vault_ref = vault.store("user-1", "broker_api_key", b"old").await.unwrap();
    vault.rotate(&vault_ref, b"new").await.unwrap();
    assert_eq!(vault.fetch(&vault_ref).await.unwrap(), b"new");
}
