//! Port for the best-effort domain event bus.

use async_trait::async_trait;

use crate::core::event::DomainEvent;

/// Contract for publishing domain events.
///
/// Fire-and-forget: implementations must never let a publish failure
/// propagate as an error to the caller, since publish must not fail the
/// business operation it's attached to.
#[async_trait]
pub trait EventBus: Send + Sync {
	async fn publish(&self, event: DomainEvent);
}
