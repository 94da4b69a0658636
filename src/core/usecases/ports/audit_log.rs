//! Port for the append-only security audit trail.

use async_trait::async_trait;

use crate::core::audit::{AuthEvent, AuditQuery};
use crate::core::error::CoreError;

/// Contract for the audit log.
#[async_trait]
pub trait AuditLog: Send + Sync {
	/// Append an event. Security-critical types (per
	/// `crate::core::audit::write_mode_for`) must be durable before this
	/// returns; the adapter decides how lower-severity types are buffered.
	async fn append(&self, event: AuthEvent) -> Result<(), CoreError>;

	/// Run a filtered query, e.g. for GDPR export or an incident review.
	async fn query(&self, query: &AuditQuery) -> Result<Vec<AuthEvent>, CoreError>;
}
