//! Tests for TradingAccountRepository port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::trading_account::TradingAccount;
use crate::core::usecases::ports::TradingAccountRepository;
use crate::core::vault::VaultRef;

struct MockTradingAccountRepo {
    accounts: Mutex<Vec<TradingAccount>>,
}

#[async_trait]
impl TradingAccountRepository for MockTradingAccountRepo {
    async fn create(&self, account: &TradingAccount) -> Result<(), CoreError> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<TradingAccount>, CoreError> {
        Ok(self.accounts.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }
    async fn find_by_owner(&self, owner_user_id: &str) -> Result<Vec<TradingAccount>, CoreError> {
        Ok(self.accounts.lock().unwrap().iter().filter(|a| a.owner_user_id == owner_user_id).cloned().collect())
    }
    async fn save(&self, account: &TradingAccount) -> Result<(), CoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        }
        Ok(())
    }
}

fn repo() -> MockTradingAccountRepo {
    MockTradingAccountRepo { accounts: Mutex::new(Vec::new()) }
}

#[tokio::test]
async fn create_then_find_by_id_round_trips() {
    let repo = repo();
    let account = TradingAccount::new("acct-1", "user-1", "ibkr", "handle-1", VaultRef::new("vault-1"));
    repo.create(&account).await.unwrap();

    let found = repo.find_by_id("acct-1").await.unwrap().unwrap();
    assert_eq!(found.owner_user_id, "user-1");
}

#[tokio::test]
async fn find_by_owner_filters_to_that_owner() {
    let repo = repo();
    repo.create(&TradingAccount::new("acct-1", "user-1", "ibkr", "h1", VaultRef::new("v1"))).await.unwrap();
    repo.create(&TradingAccount::new("acct-2", "user-2", "ibkr", "h2", VaultRef::new("v2"))).await.unwrap();

    let found = repo.find_by_owner("user-1").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "acct-1");
}

#[tokio::test]
async fn save_persists_rotated_vault_ref() {
    let repo = repo();
    let mut account = TradingAccount::new("acct-1", "user-1", "ibkr", "h1", VaultRef::new("v1"));
    repo.create(&account).await.unwrap();

    account.rotate_credentials(VaultRef::new("v2"));
    repo.save(&account).await.unwrap();

    let found = repo.find_by_id("acct-1").await.unwrap().unwrap();
    assert_eq!(found.vault_ref.id(), "v2");
}
