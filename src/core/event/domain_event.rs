use std::collections::HashMap;

use crate::core::event::channel::Channel;
use crate::core::event::priority::Priority;
use crate::core::event::routing::classify;

/// A fire-and-forget domain event published to the event bus.
///
/// `DomainEvent` carries its own routing: channels and priority are derived
/// once at construction from the type prefix, so publishers never have to
/// know the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEvent {
    pub event_id: String,
    pub event_type: String,
    pub timestamp: String,
    pub source: String,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub resource: Option<String>,
    pub data: HashMap<String, String>,
    pub metadata: HashMap<String, String>,
    pub priority: Priority,
    channels: Vec<Channel>,
}

impl DomainEvent {
    pub fn new(event_id: impl Into<String>, event_type: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let event_type = event_type.into();
        let (mut channels, priority) = classify(&event_type);
        channels.push(Channel::All);
        Self {
            event_id: event_id.into(),
            event_type,
            timestamp: timestamp.into(),
            source: "user_service".to_string(),
            subject: None,
            actor: None,
            resource: None,
            data: HashMap::new(),
            metadata: HashMap::new(),
            priority,
            channels,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = data;
        self
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}
