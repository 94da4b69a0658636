//! Tests for CredentialRepository port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::credentials::StoredCredential;
use crate::core::error::CoreError;
use crate::core::usecases::ports::CredentialRepository;

struct MockCredentialRepo {
    reset_tokens: Mutex<Vec<(String, String)>>,
    locked_until: Mutex<Option<String>>,
}

#[async_trait]
impl CredentialRepository for MockCredentialRepo {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<StoredCredential>, CoreError> {
        if user_id == "user123" {
            Ok(Some(StoredCredential::from_hash("hash")))
        } else {
            Ok(None)
        }
    }
    async fn update_failed_attempts(&self, _user_id: &str, _attempts: u32) -> Result<(), CoreError> {
        Ok(())
    }
    async fn lock_until(&self, _user_id: &str, until: &str) -> Result<(), CoreError> {
        *self.locked_until.lock().unwrap() = Some(until.to_string());
        Ok(())
    }
    async fn locked_until(&self, _user_id: &str) -> Result<Option<String>, CoreError> {
        Ok(self.locked_until.lock().unwrap().clone())
    }
    async fn update_password(&self, _user_id: &str, _new_credential: StoredCredential) -> Result<(), CoreError> {
        Ok(())
    }
    async fn initialize_credential_state(&self, _user_id: &str) -> Result<(), CoreError> {
        Ok(())
    }
    async fn store_reset_token(&self, token_hash: &str, user_id: &str, _ttl_seconds: u64) -> Result<(), CoreError> {
        self.reset_tokens.lock().unwrap().push((token_hash.to_string(), user_id.to_string()));
        Ok(())
    }
    async fn consume_reset_token(&self, token_hash: &str) -> Result<Option<String>, CoreError> {
        let mut tokens = self.reset_tokens.lock().unwrap();
        if let Some(pos) = tokens.iter().position(|(hash, _)| hash == token_hash) {
            let (_, user_id) = tokens.remove(pos);
            Ok(Some(user_id))
        } else {
            Ok(None)
        }
    }
}

fn repo() -> MockCredentialRepo {
    MockCredentialRepo {
        reset_tokens: Mutex::new(Vec::new()),
        locked_until: Mutex::new(None),
    }
}

#[tokio::test]
async fn get_by_user_id_returns_none_for_unknown_user() {
    let repo = repo();
    assert!(repo.get_by_user_id("user123").await.unwrap().is_some());
    assert!(repo.get_by_user_id("unknown").await.unwrap().is_none());
}

#[tokio::test]
async fn locked_until_reflects_the_last_lock_call() {
    let repo = repo();
    assert!(repo.locked_until("user123").await.unwrap().is_none());
    repo.lock_until("user123", "2026-01-01T00:00:00Z").await.unwrap();
    assert_eq!(repo.locked_until("user123").await.unwrap(), Some("2026-01-01T00:00:00Z".to_string()));
}

#[tokio::test]
async fn reset_token_can_only_be_consumed_once() {
    let repo = repo();
    repo.store_reset_token("hash1", "user123", 1800).await.unwrap();
    assert_eq!(repo.consume_reset_token("hash1").await.unwrap(), Some("user123".to_string()));
    assert_eq!(repo.consume_reset_token("hash1").await.unwrap(), None);
}
