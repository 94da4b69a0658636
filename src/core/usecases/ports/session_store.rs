//! Port for session and refresh-token-family storage.
//!
//! Abstracts session creation, lookup, revocation, and refresh-family
//! rotation (including reuse detection) for authentication use cases.
//! Adapters back this with a store that owns a real clock and can perform
//! the rotate-or-revoke compare-and-swap atomically (the reference
//! implementation uses Redis with a Lua script).

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::session::{RateLimitDecision, RefreshTokenRecord, RotationOutcome, Session};

/// Contract for session storage and refresh-token-family rotation.
#[async_trait]
pub trait SessionStore: Send + Sync {
	/// Persist a newly created session, including its first refresh-token
	/// family member.
	async fn create_session(&self, session: &Session, initial_refresh: &RefreshTokenRecord) -> Result<(), CoreError>;

	/// Look up a session by id.
	async fn find_session(&self, session_id: &str) -> Result<Option<Session>, CoreError>;

	/// Advance `last_active_at` on a session.
	async fn touch_session(&self, session_id: &str, now: &str) -> Result<(), CoreError>;

	/// Atomically rotate a refresh-token family: if `presented_jti` is the
	/// current tip of its family, replace it with `next` and return
	/// `RotationOutcome::Rotated`; if `presented_jti` was already rotated
	/// away (replay), delete every session and JTI in the family and return
	/// `RotationOutcome::ReuseDetected` before this call returns.
	async fn rotate_family(&self, presented_jti: &str, next: RefreshTokenRecord) -> Result<RotationOutcome, CoreError>;

	/// Revoke a single session (and its refresh-token family).
	async fn revoke_session(&self, session_id: &str) -> Result<(), CoreError>;

	/// Revoke every session belonging to a user.
	async fn revoke_all_for_user(&self, user_id: &str) -> Result<(), CoreError>;

	/// Delete all sessions past their absolute TTL.
	async fn delete_expired(&self, now: &str) -> Result<(), CoreError>;

	/// Consult and advance a named rate-limit window (e.g. `login:<email>`).
	async fn check_rate_limit(&self, key: &str, now: &str, limit: u32, window_seconds: u64) -> Result<RateLimitDecision, CoreError>;
}
