use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::audit::{AuditQuery, AuthEvent};
use crate::core::error::CoreError;
use crate::core::usecases::ports::AuditLog;

struct InMemoryAuditLog {
    events: Mutex<Vec<AuthEvent>>,
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, event: AuthEvent) -> Result<(), CoreError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn query(&self, query: &AuditQuery) -> Result<Vec<AuthEvent>, CoreError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| query.subject.as_deref().is_none_or(|subject| subject == event.subject))
            .filter(|event| query.event_type.as_deref().is_none_or(|t| t == event.event_type))
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn query_filters_by_subject_and_type() {
    let log = InMemoryAuditLog { events: Mutex::new(Vec::new()) };
    log.append(AuthEvent::new("e1", "login.success", "t0", "user:1")).await.unwrap();
    log.append(AuthEvent::new("e2", "login.failed", "t0", "user:2")).await.unwrap();

    let results = log.query(&AuditQuery::new().for_subject("user:1")).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].event_id, "e1");

    let results = log.query(&AuditQuery::new().of_type("login.failed")).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].event_id, "e2");
}
