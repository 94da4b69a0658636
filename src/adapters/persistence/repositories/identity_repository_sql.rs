//! SQL-backed implementation of the `IdentityRepository` port.
//!
//! Implements queries against the `principals`, `user_roles`, and
//! `workspaces` tables.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::adapters::persistence::database::Database;
use crate::core::error::{CoreError, InvariantError};
use crate::core::identity::{OAuthProvider, Principal, PrincipalStatus, RoleSet, UserIdentity, WorkspaceIdentity};
use crate::core::usecases::ports::IdentityRepository;

pub struct IdentityRepositorySql {
    db: Database,
}

impl IdentityRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}

fn map_query_err(e: sqlx::Error) -> CoreError {
    CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("postgres", e.to_string()))
}

fn status_to_str(status: PrincipalStatus) -> &'static str {
    match status {
        PrincipalStatus::PendingVerification => "pending_verification",
        PrincipalStatus::Active => "active",
        PrincipalStatus::Suspended => "suspended",
        PrincipalStatus::Deactivated => "deactivated",
    }
}

fn status_from_str(status: &str) -> Result<PrincipalStatus, CoreError> {
    match status {
        "pending_verification" => Ok(PrincipalStatus::PendingVerification),
        "active" => Ok(PrincipalStatus::Active),
        "suspended" => Ok(PrincipalStatus::Suspended),
        "deactivated" => Ok(PrincipalStatus::Deactivated),
        other => Err(CoreError::Internal(InvariantError::inconsistent_state(format!(
            "unrecognized principal status in storage: {other}"
        )))),
    }
}

fn oauth_provider_to_str(provider: &OAuthProvider) -> &'static str {
    match provider {
        OAuthProvider::Google => "google",
    }
}

fn oauth_provider_from_str(provider: &str) -> Result<OAuthProvider, CoreError> {
    match provider {
        "google" => Ok(OAuthProvider::Google),
        other => Err(CoreError::Internal(InvariantError::inconsistent_state(format!(
            "unrecognized oauth provider in storage: {other}"
        )))),
    }
}

#[async_trait]
impl IdentityRepository for IdentityRepositorySql {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserIdentity>, CoreError> {
        const QUERY: &str = "SELECT id FROM principals WHERE email = $1";
        let row = sqlx::query(QUERY)
            .bind(identifier)
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(row.map(|r| UserIdentity::new(r.get::<String, _>("id"))))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserIdentity>, CoreError> {
        const QUERY: &str = "SELECT id FROM principals WHERE id = $1";
        let row = sqlx::query(QUERY).bind(id).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        Ok(row.map(|r| UserIdentity::new(r.get::<String, _>("id"))))
    }

    async fn find_workspace_by_id(&self, id: &str) -> Result<Option<WorkspaceIdentity>, CoreError> {
        const QUERY: &str = "SELECT id FROM workspaces WHERE id = $1";
        let row = sqlx::query(QUERY).bind(id).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        Ok(row.map(|r| WorkspaceIdentity::new(r.get::<String, _>("id"))))
    }

    async fn find_principal(&self, user_id: &str) -> Result<Option<Principal>, CoreError> {
        const QUERY: &str = r#"
            SELECT id, email, display_name, phone, timezone, locale, status, mfa_enabled, oauth_provider
            FROM principals
            WHERE id = $1
        "#;
        let row = match sqlx::query(QUERY).bind(user_id).fetch_optional(self.db.pool()).await.map_err(map_query_err)? {
            Some(row) => row,
            None => return Ok(None),
        };

        let oauth_provider: Option<String> = row.get("oauth_provider");
        Ok(Some(Principal {
            id: row.get("id"),
            email: row.get("email"),
            display_name: row.get("display_name"),
            phone: row.get("phone"),
            timezone: row.get("timezone"),
            locale: row.get("locale"),
            status: status_from_str(row.get("status"))?,
            mfa_enabled: row.get("mfa_enabled"),
            oauth_provider: oauth_provider.map(|p| oauth_provider_from_str(&p)).transpose()?,
        }))
    }

    async fn create(
        &self,
        user_id: &uuid::Uuid,
        identifier: &str,
        password_hash: &str,
        salt: &str,
        algorithm: &str,
        iterations: u32,
    ) -> Result<(), CoreError> {
        const INSERT_PRINCIPAL: &str = r#"
            INSERT INTO principals (id, email, display_name, status, mfa_enabled, created_at, updated_at)
            VALUES ($1, $2, $2, 'pending_verification', false, $3, $3)
        "#;
        const INSERT_CREDENTIAL: &str = r#"
            INSERT INTO identity_credential
                (user_id, password_hash, salt, algorithm, iterations, failed_attempts, password_changed_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6, $6, $6)
        "#;

        let now = Utc::now();
        let mut tx = self.db.pool().begin().await.map_err(map_query_err)?;

        sqlx::query(INSERT_PRINCIPAL)
            .bind(user_id.to_string())
            .bind(identifier)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if e.as_database_error().is_some_and(|de| de.is_unique_violation()) {
                    CoreError::conflict(format!("identifier {identifier} already exists"))
                } else {
                    map_query_err(e)
                }
            })?;

        sqlx::query(INSERT_CREDENTIAL)
            .bind(user_id.to_string())
            .bind(password_hash)
            .bind(salt)
            .bind(algorithm)
            .bind(iterations as i32)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_query_err)?;

        tx.commit().await.map_err(map_query_err)?;
        Ok(())
    }

    async fn save_principal(&self, principal: &Principal) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            UPDATE principals
            SET email = $1, display_name = $2, phone = $3, timezone = $4, locale = $5,
                status = $6, mfa_enabled = $7, oauth_provider = $8, updated_at = $9
            WHERE id = $10
        "#;
        sqlx::query(QUERY)
            .bind(&principal.email)
            .bind(&principal.display_name)
            .bind(&principal.phone)
            .bind(&principal.timezone)
            .bind(&principal.locale)
            .bind(status_to_str(principal.status))
            .bind(principal.mfa_enabled)
            .bind(principal.oauth_provider.as_ref().map(oauth_provider_to_str))
            .bind(Utc::now())
            .bind(&principal.id)
            .execute(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(())
    }

    async fn roles_for(&self, user_id: &str) -> Result<RoleSet, CoreError> {
        const QUERY: &str = "SELECT role FROM user_roles WHERE user_id = $1";
        let rows = sqlx::query(QUERY).bind(user_id).fetch_all(self.db.pool()).await.map_err(map_query_err)?;
        Ok(RoleSet::new(rows.into_iter().map(|r| r.get::<String, _>("role")).collect()))
    }

    async fn save_roles(&self, user_id: &str, roles: &RoleSet) -> Result<(), CoreError> {
        const DELETE: &str = "DELETE FROM user_roles WHERE user_id = $1";
        const INSERT: &str = "INSERT INTO user_roles (user_id, role, granted_at) VALUES ($1, $2, $3)";

        let mut tx = self.db.pool().begin().await.map_err(map_query_err)?;
        sqlx::query(DELETE).bind(user_id).execute(&mut *tx).await.map_err(map_query_err)?;
        let now = Utc::now();
        for role in roles.as_slice() {
            sqlx::query(INSERT).bind(user_id).bind(role).bind(now).execute(&mut *tx).await.map_err(map_query_err)?;
        }
        tx.commit().await.map_err(map_query_err)?;
        Ok(())
    }
}
