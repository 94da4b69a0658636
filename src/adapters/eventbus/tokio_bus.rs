//! In-process fan-out over `tokio::sync::broadcast`.
//!
//! Every subscriber gets every event regardless of channel; channel
//! filtering is the subscriber's job (`event.channels()` tells it whether
//! to care). A publish with zero live subscribers is not an error — it's
//! the expected steady state between deploys of downstream consumers.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::core::event::DomainEvent;
use crate::core::usecases::ports::EventBus;

const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

pub struct TokioEventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl TokioEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to the full, unfiltered event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for TokioEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for TokioEventBus {
    async fn publish(&self, event: DomainEvent) {
        let event_type = event.event_type.clone();
        match self.sender.send(event) {
            Ok(subscriber_count) => {
                trace!(event_type = %event_type, subscribers = subscriber_count, "published domain event");
            }
            Err(_) => {
                debug!(event_type = %event_type, "published domain event with no live subscribers");
            }
        }
    }
}
