//! Port for trading-account (broker link) persistence.
//!
//! Abstracts lookup and mutation of `TradingAccount` records for the
//! credential-linkage use cases. Credential material itself never passes
//! through this port — only the `VaultRef` pointing at it.

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::trading_account::TradingAccount;

/// Contract for trading-account persistence.
#[async_trait]
pub trait TradingAccountRepository: Send + Sync {
	/// Create a new trading-account link.
	async fn create(&self, account: &TradingAccount) -> Result<(), CoreError>;

	/// Find a trading account by its id.
	async fn find_by_id(&self, id: &str) -> Result<Option<TradingAccount>, CoreError>;

	/// List every trading account owned by a user.
	async fn find_by_owner(&self, owner_user_id: &str) -> Result<Vec<TradingAccount>, CoreError>;

	/// Persist an updated account (status transition or credential rotation).
	async fn save(&self, account: &TradingAccount) -> Result<(), CoreError>;
}
