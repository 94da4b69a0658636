//! Domain events published on the best-effort, fire-and-forget event bus.
//! Delivery, fan-out, and subscriber durability are adapter concerns; this
//! module only defines the event shape and its routing classification.

mod channel;
mod domain_event;
mod priority;
mod routing;

pub use channel::Channel;
pub use domain_event::DomainEvent;
pub use priority::Priority;
pub use routing::classify;
