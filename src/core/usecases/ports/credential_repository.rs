//! Port for credential repository access.
//!
//! Abstracts credential lookup and mutation for authentication use cases.
//!
//! Adapters must implement this trait to provide persistence or external credential management.

use async_trait::async_trait;

use crate::core::credentials::StoredCredential;
use crate::core::error::CoreError;

/// Contract for credential repository access.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
	/// Get the stored credential for a user by user id.
	async fn get_by_user_id(&self, user_id: &str) -> Result<Option<StoredCredential>, CoreError>;

	/// Update the failed login attempts counter for a user.
	async fn update_failed_attempts(&self, user_id: &str, attempts: u32) -> Result<(), CoreError>;

	/// Lock the user account until a given timestamp (RFC3339).
	async fn lock_until(&self, user_id: &str, until: &str) -> Result<(), CoreError>;

	/// Current lock expiry for a user, if the account is presently locked.
	async fn locked_until(&self, user_id: &str) -> Result<Option<String>, CoreError>;

	/// Update the user's password to a new stored credential.
	async fn update_password(&self, user_id: &str, new_credential: StoredCredential) -> Result<(), CoreError>;

	/// Initialize credential state for a new user (zero failed attempts, no lock).
	async fn initialize_credential_state(&self, user_id: &str) -> Result<(), CoreError>;

	/// Store a password-reset token hash with a TTL and the owning user id.
	/// `ttl_seconds` is advisory to the adapter, which owns the clock.
	async fn store_reset_token(&self, token_hash: &str, user_id: &str, ttl_seconds: u64) -> Result<(), CoreError>;

	/// Consume a password-reset token: look up its owner and invalidate it
	/// so it cannot be used twice, in one atomic step.
	async fn consume_reset_token(&self, token_hash: &str) -> Result<Option<String>, CoreError>;
}
