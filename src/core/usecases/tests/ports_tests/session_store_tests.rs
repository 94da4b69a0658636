use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::session::{RateLimitDecision, RefreshTokenRecord, RotationOutcome, Session};
use crate::core::usecases::ports::SessionStore;

struct InMemorySessionStore {
    sessions: Mutex<Vec<Session>>,
    families: Mutex<Vec<RefreshTokenRecord>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self, session: &Session, initial_refresh: &RefreshTokenRecord) -> Result<(), CoreError> {
        self.sessions.lock().unwrap().push(session.clone());
        self.families.lock().unwrap().push(initial_refresh.clone());
        Ok(())
    }

    async fn find_session(&self, session_id: &str) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.lock().unwrap().iter().find(|s| s.id == session_id).cloned())
    }

    async fn touch_session(&self, session_id: &str, now: &str) -> Result<(), CoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        if let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) {
            *session = session.touched(now);
        }
        Ok(())
    }

    async fn rotate_family(&self, presented_jti: &str, next: RefreshTokenRecord) -> Result<RotationOutcome, CoreError> {
        let mut families = self.families.lock().unwrap();
        let current = families.iter().find(|r| r.jti == presented_jti).cloned();
        match current {
            None => Ok(RotationOutcome::UnknownToken),
            Some(record) if record.consumed => {
                let family_id = record.family_id.clone();
                families.retain(|r| r.family_id != family_id);
                self.sessions.lock().unwrap().retain(|s| s.id != record.session_id);
                Ok(RotationOutcome::ReuseDetected { family_id })
            }
            Some(record) => {
                let new_jti = next.jti.clone();
                if let Some(slot) = families.iter_mut().find(|r| r.jti == record.jti) {
                    slot.consumed = true;
                    slot.rotated_to = Some(new_jti.clone());
                }
                families.push(next);
                Ok(RotationOutcome::Rotated { new_jti })
            }
        }
    }

    async fn revoke_session(&self, session_id: &str) -> Result<(), CoreError> {
        self.sessions.lock().unwrap().retain(|s| s.id != session_id);
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: &str) -> Result<(), CoreError> {
        self.sessions.lock().unwrap().retain(|s| s.user_id != user_id);
        Ok(())
    }

    async fn delete_expired(&self, _now: &str) -> Result<(), CoreError> {
        Ok(())
    }

    async fn check_rate_limit(&self, _key: &str, _now: &str, _limit: u32, _window_seconds: u64) -> Result<RateLimitDecision, CoreError> {
        Ok(RateLimitDecision::Allow)
    }
}

fn store() -> InMemorySessionStore {
    InMemorySessionStore {
        sessions: Mutex::new(Vec::new()),
        families: Mutex::new(Vec::new()),
    }
}

#[tokio::test]
async fn create_then_find_roundtrips() {
    let store = store();
    let session = Session::new("s1", "u1", "fp", "1.2.3.4", "t0", crate::core::session::SessionPersistence::Ephemeral);
    let refresh = RefreshTokenRecord::open_family("j1", "f1", "u1", "s1");
    store.create_session(&session, &refresh).await.unwrap();
    assert_eq!(store.find_session("s1").await.unwrap(), Some(session));
}

#[tokio::test]
async fn rotate_family_replay_revokes_session_and_family() {
    let store = store();
    let session = Session::new("s1", "u1", "fp", "1.2.3.4", "t0", crate::core::session::SessionPersistence::Ephemeral);
    let r1 = RefreshTokenRecord::open_family("j1", "f1", "u1", "s1");
    store.create_session(&session, &r1).await.unwrap();

    let r2 = RefreshTokenRecord::descend(&r1, "j2");
    let first = store.rotate_family("j1", r2).await.unwrap();
    assert_eq!(first, RotationOutcome::Rotated { new_jti: "j2".to_string() });

    let r3 = RefreshTokenRecord::descend(&r1, "j3");
    let replay = store.rotate_family("j1", r3).await.unwrap();
    assert!(replay.is_reuse_detected());
    assert_eq!(store.find_session("s1").await.unwrap(), None);
}
