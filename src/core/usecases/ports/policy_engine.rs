//! Port for the authorization decision point.
//!
//! The pure evaluation algorithm lives in `crate::core::policy::evaluate`;
//! this port is what the use-case layer calls, and is where the decision
//! cache and policy-store lookup live (both adapter concerns).

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::policy::{Decision, Verdict};

/// Contract for the policy decision point.
#[async_trait]
pub trait PolicyEngine: Send + Sync {
	/// Evaluate a decision, consulting the decision cache first.
	async fn check(&self, decision: &Decision) -> Result<Verdict, CoreError>;

	/// Invalidate every cached decision for a subject. Called after role or
	/// permission mutations, before the mutating call returns.
	async fn invalidate_subject(&self, user_id: &str) -> Result<(), CoreError>;

	/// Invalidate the entire decision cache. Called after policy-set changes.
	async fn invalidate_all(&self) -> Result<(), CoreError>;
}
