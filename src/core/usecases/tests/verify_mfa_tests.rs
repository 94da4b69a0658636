//! Tests for VerifyMfa use case.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::super::issue_session::IssueSession;
use super::super::policies::TokenPolicy;
use super::super::verify_mfa::{VerifyMfa, VerifyMfaInput};
use crate::core::audit::{AuditQuery, AuthEvent};
use crate::core::error::{CoreError, MfaError};
use crate::core::event::DomainEvent;
use crate::core::identity::{Principal, RoleSet, UserIdentity, WorkspaceIdentity};
use crate::core::mfa::{MfaChallenge, MfaMethod};
use crate::core::session::{RateLimitDecision, RefreshTokenRecord, RotationOutcome, Session};
use crate::core::token::TokenClaims;
use crate::core::usecases::ports::{
    AuditLog, Clock, EventBus, IdentityRepository, IssuedToken, MfaEnrollment, MfaEngineService, SessionStore, TokenIssuer,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct MockIdentityRepo;

#[async_trait]
impl IdentityRepository for MockIdentityRepo {
    async fn find_by_identifier(&self, _identifier: &str) -> Result<Option<UserIdentity>, CoreError> {
        Ok(None)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<UserIdentity>, CoreError> {
        Ok(Some(UserIdentity::new(id)))
    }
    async fn find_workspace_by_id(&self, _id: &str) -> Result<Option<WorkspaceIdentity>, CoreError> {
        Ok(None)
    }
    async fn find_principal(&self, user_id: &str) -> Result<Option<Principal>, CoreError> {
        Ok(Some(Principal::new(user_id, "trader@example.com", "Trader")))
    }
    async fn create(&self, _u: &uuid::Uuid, _i: &str, _p: &str, _s: &str, _a: &str, _it: u32) -> Result<(), CoreError> {
        Ok(())
    }
    async fn save_principal(&self, _principal: &Principal) -> Result<(), CoreError> {
        Ok(())
    }
    async fn roles_for(&self, _user_id: &str) -> Result<RoleSet, CoreError> {
        Ok(RoleSet::new(vec!["trader".to_string()]))
    }
    async fn save_roles(&self, _user_id: &str, _roles: &RoleSet) -> Result<(), CoreError> {
        Ok(())
    }
}

struct NullSessionStore;

#[async_trait]
impl SessionStore for NullSessionStore {
    async fn create_session(&self, _session: &Session, _initial_refresh: &RefreshTokenRecord) -> Result<(), CoreError> {
        Ok(())
    }
    async fn find_session(&self, _session_id: &str) -> Result<Option<Session>, CoreError> {
        Ok(None)
    }
    async fn touch_session(&self, _session_id: &str, _now: &str) -> Result<(), CoreError> {
        Ok(())
    }
    async fn rotate_family(&self, _presented_jti: &str, _next: RefreshTokenRecord) -> Result<RotationOutcome, CoreError> {
        Ok(RotationOutcome::UnknownToken)
    }
    async fn revoke_session(&self, _session_id: &str) -> Result<(), CoreError> {
        Ok(())
    }
    async fn revoke_all_for_user(&self, _user_id: &str) -> Result<(), CoreError> {
        Ok(())
    }
    async fn delete_expired(&self, _now: &str) -> Result<(), CoreError> {
        Ok(())
    }
    async fn check_rate_limit(&self, _key: &str, _now: &str, _limit: u32, _window_seconds: u64) -> Result<RateLimitDecision, CoreError> {
        Ok(RateLimitDecision::Allow)
    }
}

struct EchoTokenIssuer;

#[async_trait]
impl TokenIssuer for EchoTokenIssuer {
    async fn mint(&self, claims: &TokenClaims) -> Result<IssuedToken, CoreError> {
        Ok(IssuedToken { compact: format!("{}.token", claims.kind), kid: "kid-1".to_string() })
    }
    async fn validate(&self, _compact: &str) -> Result<TokenClaims, CoreError> {
        unimplemented!("not exercised by VerifyMfa")
    }
}

struct ScriptedMfaEngine {
    accepted_code: &'static str,
}

#[async_trait]
impl MfaEngineService for ScriptedMfaEngine {
    async fn begin_enrollment(&self, _user_id: &str) -> Result<MfaEnrollment, CoreError> {
        unimplemented!()
    }
    async fn confirm_enrollment(&self, _user_id: &str, _code: &str) -> Result<(), CoreError> {
        unimplemented!()
    }
    async fn issue_challenge(&self, _user_id: &str) -> Result<MfaChallenge, CoreError> {
        unimplemented!()
    }
    async fn consume_challenge(&self, token: &str) -> Result<MfaChallenge, CoreError> {
        if token == "expired-token" {
            return Err(MfaError::ChallengeExpired.into());
        }
        Ok(MfaChallenge::new(token, "user-1", "t0"))
    }
    async fn verify(&self, _user_id: &str, code: &str) -> Result<MfaMethod, CoreError> {
        if code == self.accepted_code {
            Ok(MfaMethod::Totp)
        } else {
            Err(MfaError::InvalidCode.into())
        }
    }
    async fn disable(&self, _user_id: &str) -> Result<(), CoreError> {
        unimplemented!()
    }
}

struct RecordingAuditLog {
    events: Mutex<Vec<AuthEvent>>,
}

#[async_trait]
impl AuditLog for RecordingAuditLog {
    async fn append(&self, event: AuthEvent) -> Result<(), CoreError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
    async fn query(&self, _query: &AuditQuery) -> Result<Vec<AuthEvent>, CoreError> {
        Ok(self.events.lock().unwrap().clone())
    }
}

struct NullEventBus;

#[async_trait]
impl EventBus for NullEventBus {
    async fn publish(&self, _event: DomainEvent) {}
}

fn use_case() -> (VerifyMfa, Arc<RecordingAuditLog>) {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(Utc::now()));
    let session_store: Arc<dyn SessionStore> = Arc::new(NullSessionStore);
    let audit_log = Arc::new(RecordingAuditLog { events: Mutex::new(Vec::new()) });
    let issue_session = IssueSession::new(session_store, Arc::new(EchoTokenIssuer), clock.clone(), TokenPolicy::new(900, 7776000, true));

    let use_case = VerifyMfa::new(
        Arc::new(MockIdentityRepo),
        Arc::new(ScriptedMfaEngine { accepted_code: "123456" }),
        audit_log.clone(),
        Arc::new(NullEventBus),
        clock,
        issue_session,
    );
    (use_case, audit_log)
}

#[tokio::test]
async fn correct_code_issues_a_mfa_verified_session() {
    let (use_case, audit_log) = use_case();

    let output = use_case
        .execute(VerifyMfaInput {
            challenge: "challenge-token".to_string(),
            code: "123456".to_string(),
            device_fingerprint: "fp-1".to_string(),
            creating_ip: "10.0.0.1".to_string(),
            remember_me: false,
        })
        .await
        .unwrap();

    assert!(!output.session_id.is_empty());
    assert!(audit_log.events.lock().unwrap().iter().any(|e| e.event_type == "login.success"));
}

#[tokio::test]
async fn wrong_code_is_rejected_and_audited() {
    let (use_case, audit_log) = use_case();

    let err = use_case
        .execute(VerifyMfaInput {
            challenge: "challenge-token".to_string(),
            code: "000000".to_string(),
            device_fingerprint: "fp-1".to_string(),
            creating_ip: "10.0.0.1".to_string(),
            remember_me: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Authentication(_)));
    assert!(audit_log.events.lock().unwrap().iter().any(|e| e.event_type == "mfa.failed"));
}

#[tokio::test]
async fn expired_challenge_is_rejected() {
    let (use_case, _) = use_case();

    let err = use_case
        .execute(VerifyMfaInput {
            challenge: "expired-token".to_string(),
            code: "123456".to_string(),
            device_fingerprint: "fp-1".to_string(),
            creating_ip: "10.0.0.1".to_string(),
            remember_me: false,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Authentication(_)));
}
