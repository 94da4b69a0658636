//! Port for identity repository access.
//!
//! Abstracts user and workspace identity lookup for authentication use cases.
//!
//! Adapters must implement this trait to provide persistence or external identity resolution.

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::identity::{Principal, RoleSet, UserIdentity, WorkspaceIdentity};

/// Contract for identity repository access.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
	/// Find a user identity by a unique identifier (e.g., username, email).
	async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserIdentity>, CoreError>;

	/// Find a user identity by its unique id.
	async fn find_by_id(&self, id: &str) -> Result<Option<UserIdentity>, CoreError>;

	/// Find a workspace identity by its unique id.
	async fn find_workspace_by_id(&self, id: &str) -> Result<Option<WorkspaceIdentity>, CoreError>;

	/// Load the principal record (status, mfa flag, role set) backing an identity.
	async fn find_principal(&self, user_id: &str) -> Result<Option<Principal>, CoreError>;

	/// Create a new identity with the given credentials.
	///
	/// # Arguments
	/// * `user_id` - Unique user identifier
	/// * `identifier` - User's unique identifier (username/email)
	/// * `password_hash` - Hashed password
	/// * `salt` - Password salt
	/// * `algorithm` - Hashing algorithm used
	/// * `iterations` - Number of hashing iterations
	///
	/// # Errors
	/// Returns `CoreError::Conflict` if the identifier already exists.
	async fn create(
		&self,
		user_id: &uuid::Uuid,
		identifier: &str,
		password_hash: &str,
		salt: &str,
		algorithm: &str,
		iterations: u32,
	) -> Result<(), CoreError>;

	/// Persist an updated principal (status, mfa flag, profile fields).
	async fn save_principal(&self, principal: &Principal) -> Result<(), CoreError>;

	/// Load the role set currently held by a principal.
	async fn roles_for(&self, user_id: &str) -> Result<RoleSet, CoreError>;

	/// Persist a role grant or revocation. Callers must have already
	/// rejected mutations that would leave the principal with zero roles.
	async fn save_roles(&self, user_id: &str, roles: &RoleSet) -> Result<(), CoreError>;
}
