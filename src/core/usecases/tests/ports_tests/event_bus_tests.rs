use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::event::DomainEvent;
use crate::core::usecases::ports::EventBus;

struct RecordingBus {
    published: Mutex<Vec<DomainEvent>>,
}

#[async_trait]
impl EventBus for RecordingBus {
    async fn publish(&self, event: DomainEvent) {
        self.published.lock().unwrap().push(event);
    }
}

#[tokio::test]
async fn publish_never_returns_a_result_to_fail_the_caller() {
    let bus = RecordingBus { published: Mutex::new(Vec::new()) };
    bus.publish(DomainEvent::new("e1", "login.success", "t0")).await;
    assert_eq!(bus.published.lock().unwrap().len(), 1);
}
