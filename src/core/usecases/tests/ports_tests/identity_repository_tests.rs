//! Tests for IdentityRepository port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::identity::{Principal, RoleSet, UserIdentity, WorkspaceIdentity};
use crate::core::usecases::ports::IdentityRepository;

struct MockIdentityRepo {
    roles: Mutex<RoleSet>,
}

#[async_trait]
impl IdentityRepository for MockIdentityRepo {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserIdentity>, CoreError> {
        if identifier == "user" {
            Ok(Some(UserIdentity::new("user123")))
        } else {
            Ok(None)
        }
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<UserIdentity>, CoreError> {
        if id == "user123" {
            Ok(Some(UserIdentity::new(id)))
        } else {
            Ok(None)
        }
    }
    async fn find_workspace_by_id(&self, _id: &str) -> Result<Option<WorkspaceIdentity>, CoreError> {
        Ok(None)
    }
    async fn find_principal(&self, user_id: &str) -> Result<Option<Principal>, CoreError> {
        if user_id == "user123" {
            Ok(Some(Principal::new("user123", "user@example.com", "User")))
        } else {
            Ok(None)
        }
    }
    async fn create(
        &self,
        _user_id: &uuid::Uuid,
        _identifier: &str,
        _password_hash: &str,
        _salt: &str,
        _algorithm: &str,
        _iterations: u32,
    ) -> Result<(), CoreError> {
        Ok(())
    }
    async fn save_principal(&self, _principal: &Principal) -> Result<(), CoreError> {
        Ok(())
    }
    async fn roles_for(&self, _user_id: &str) -> Result<RoleSet, CoreError> {
        Ok(self.roles.lock().unwrap().clone())
    }
    async fn save_roles(&self, _user_id: &str, roles: &RoleSet) -> Result<(), CoreError> {
        *self.roles.lock().unwrap() = roles.clone();
        Ok(())
    }
}

fn repo() -> MockIdentityRepo {
    MockIdentityRepo {
        roles: Mutex::new(RoleSet::new(vec!["user".to_string()])),
    }
}

#[tokio::test]
async fn find_by_identifier_returns_none_for_unknown() {
    let repo = repo();
    assert!(repo.find_by_identifier("user").await.unwrap().is_some());
    assert!(repo.find_by_identifier("unknown").await.unwrap().is_none());
}

#[tokio::test]
async fn find_principal_round_trips_status() {
    let repo = repo();
    let principal = repo.find_principal("user123").await.unwrap().unwrap();
    assert_eq!(principal.email, "user@example.com");
}

#[tokio::test]
async fn save_roles_replaces_role_set() {
    let repo = repo();
    let new_roles = RoleSet::new(vec!["user".to_string(), "admin".to_string()]);
    repo.save_roles("user123", &new_roles).await.unwrap();
    assert_eq!(repo.roles_for("user123").await.unwrap(), new_roles);
}
