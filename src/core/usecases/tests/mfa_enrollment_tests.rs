//! Tests for MfaEnrollmentFlow use case.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::super::mfa_enrollment::MfaEnrollmentFlow;
use crate::core::error::CoreError;
use crate::core::identity::{Principal, RoleSet, UserIdentity, WorkspaceIdentity};
use crate::core::mfa::{MfaChallenge, MfaMethod, TotpSecret};
use crate::core::usecases::ports::{IdentityRepository, MfaEnrollment, MfaEngineService};

struct MockIdentityRepo {
    principals: Mutex<HashMap<String, Principal>>,
}

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
        Ok(self.principals.lock().unwrap().get(user_id).cloned())
    }
    async fn create(&self, _u: &uuid::Uuid, _i: &str, _p: &str, _s: &str, _a: &str, _it: u32) -> Result<(), CoreError> {
        Ok(())
    }
    async fn save_principal(&self, principal: &Principal) -> Result<(), CoreError> {
        self.principals.lock().unwrap().insert(principal.id.clone(), principal.clone());
        Ok(())
    }
    async fn roles_for(&self, _user_id: &str) -> Result<RoleSet, CoreError> {
        Ok(RoleSet::new(vec!["trader".to_string()]))
    }
    async fn save_roles(&self, _user_id: &str, _roles: &RoleSet) -> Result<(), CoreError> {
        Ok(())
    }
}

struct ScriptedMfaEngine {
    accepted_code: &'static str,
}

#[async_trait]
impl MfaEngineService for ScriptedMfaEngine {
    async fn begin_enrollment(&self, _user_id: &str) -> Result<MfaEnrollment, CoreError> {
        Ok(MfaEnrollment {
            secret: TotpSecret::enroll("vault-ref-1", "t0"),
            provisioning_uri: "otpauth://totp/platform:trader?secret=ABC".to_string(),
            backup_codes: vec!["code-1".to_string()],
        })
    }
    async fn confirm_enrollment(&self, _user_id: &str, code: &str) -> Result<(), CoreError> {
        if code == self.accepted_code {
            Ok(())
        } else {
            Err(crate::core::error::MfaError::InvalidCode.into())
        }
    }
    async fn issue_challenge(&self, _user_id: &str) -> Result<MfaChallenge, CoreError> {
        unimplemented!("not exercised by MfaEnrollmentFlow")
    }
    async fn consume_challenge(&self, _token: &str) -> Result<MfaChallenge, CoreError> {
        unimplemented!("not exercised by MfaEnrollmentFlow")
    }
    async fn verify(&self, _user_id: &str, _code: &str) -> Result<MfaMethod, CoreError> {
        unimplemented!("not exercised by MfaEnrollmentFlow")
    }
    async fn disable(&self, _user_id: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

fn fixture() -> (MfaEnrollmentFlow, Arc<MockIdentityRepo>) {
    let mut principals = HashMap::new();
    principals.insert("user-1".to_string(), Principal::new("user-1", "trader@example.com", "Trader"));
    let identity_repo = Arc::new(MockIdentityRepo { principals: Mutex::new(principals) });
    let use_case = MfaEnrollmentFlow::new(identity_repo.clone(), Arc::new(ScriptedMfaEngine { accepted_code: "123456" }));
    (use_case, identity_repo)
}

#[tokio::test]
async fn begin_returns_the_provisioning_material() {
    let (use_case, _) = fixture();

    let enrollment = use_case.begin("user-1").await.unwrap();

    assert!(!enrollment.secret.confirmed);
    assert_eq!(enrollment.backup_codes.len(), 1);
}

#[tokio::test]
async fn confirming_with_the_right_code_flips_mfa_enabled_on_the_principal() {
    let (use_case, identity_repo) = fixture();

    use_case.confirm("user-1", "123456").await.unwrap();

    assert!(identity_repo.principals.lock().unwrap().get("user-1").unwrap().mfa_enabled);
}

#[tokio::test]
async fn confirming_with_the_wrong_code_leaves_mfa_disabled() {
    let (use_case, identity_repo) = fixture();

    let err = use_case.confirm("user-1", "000000").await.unwrap_err();

    assert!(matches!(err, CoreError::Authentication(_)));
    assert!(!identity_repo.principals.lock().unwrap().get("user-1").unwrap().mfa_enabled);
}

#[tokio::test]
async fn disabling_flips_mfa_enabled_back_off() {
    let (use_case, identity_repo) = fixture();
    identity_repo.principals.lock().unwrap().get_mut("user-1").unwrap().mfa_enabled = true;

    use_case.disable("user-1").await.unwrap();

    assert!(!identity_repo.principals.lock().unwrap().get("user-1").unwrap().mfa_enabled);
}
