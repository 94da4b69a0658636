//! SQL-backed implementation of the `CredentialRepository` port.
//!
//! Implements mutations against the `identity_credential` and
//! `password_reset_tokens` tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::adapters::persistence::database::Database;
use crate::core::credentials::StoredCredential;
use crate::core::error::{CoreError, InvariantError};
use crate::core::usecases::ports::CredentialRepository;

pub struct CredentialRepositorySql {
    db: Database,
}

impl CredentialRepositorySql {
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

#[async_trait]
impl CredentialRepository for CredentialRepositorySql {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<StoredCredential>, CoreError> {
        const QUERY: &str = "SELECT password_hash FROM identity_credential WHERE user_id = $1";
        let row = sqlx::query(QUERY).bind(user_id).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        Ok(row.map(|r| StoredCredential::from_hash(r.get::<String, _>("password_hash"))))
    }

    async fn update_failed_attempts(&self, user_id: &str, attempts: u32) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            UPDATE identity_credential SET failed_attempts = $1, updated_at = $2 WHERE user_id = $3
        "#;
        sqlx::query(QUERY)
            .bind(attempts as i32)
            .bind(Utc::now())
            .bind(user_id)
            .execute(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(())
    }

    async fn lock_until(&self, user_id: &str, until: &str) -> Result<(), CoreError> {
        let until: DateTime<Utc> = DateTime::parse_from_rfc3339(until)
            .map_err(|e| CoreError::Internal(InvariantError::inconsistent_state(format!("invalid lock timestamp: {e}"))))?
            .with_timezone(&Utc);
        const QUERY: &str = r#"
            UPDATE identity_credential SET locked_until = $1, updated_at = $2 WHERE user_id = $3
        "#;
        sqlx::query(QUERY).bind(until).bind(Utc::now()).bind(user_id).execute(self.db.pool()).await.map_err(map_query_err)?;
        Ok(())
    }

    async fn locked_until(&self, user_id: &str) -> Result<Option<String>, CoreError> {
        const QUERY: &str = "SELECT locked_until FROM identity_credential WHERE user_id = $1";
        let row = sqlx::query(QUERY).bind(user_id).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        let locked_until: Option<DateTime<Utc>> = row.and_then(|r| r.get("locked_until"));
        Ok(locked_until.map(|ts| ts.to_rfc3339()))
    }

    async fn update_password(&self, user_id: &str, new_credential: StoredCredential) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            UPDATE identity_credential
            SET password_hash = $1, password_changed_at = $2, failed_attempts = 0, locked_until = NULL, updated_at = $2
            WHERE user_id = $3
        "#;
        sqlx::query(QUERY)
            .bind(new_credential.as_hash_str())
            .bind(Utc::now())
            .bind(user_id)
            .execute(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(())
    }

    async fn initialize_credential_state(&self, user_id: &str) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            UPDATE identity_credential SET failed_attempts = 0, locked_until = NULL, updated_at = $1 WHERE user_id = $2
        "#;
        sqlx::query(QUERY).bind(Utc::now()).bind(user_id).execute(self.db.pool()).await.map_err(map_query_err)?;
        Ok(())
    }

    async fn store_reset_token(&self, token_hash: &str, user_id: &str, ttl_seconds: u64) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            INSERT INTO password_reset_tokens (token_hash, user_id, expires_at, consumed)
            VALUES ($1, $2, $3, false)
            ON CONFLICT (token_hash) DO UPDATE SET user_id = excluded.user_id, expires_at = excluded.expires_at, consumed = false
        "#;
        let expires_at = Utc::now() + chrono::Duration::seconds(ttl_seconds as i64);
        sqlx::query(QUERY).bind(token_hash).bind(user_id).bind(expires_at).execute(self.db.pool()).await.map_err(map_query_err)?;
        Ok(())
    }

    async fn consume_reset_token(&self, token_hash: &str) -> Result<Option<String>, CoreError> {
        const QUERY: &str = r#"
            UPDATE password_reset_tokens
            SET consumed = true
            WHERE token_hash = $1 AND consumed = false AND expires_at > $2
            RETURNING user_id
        "#;
        let row = sqlx::query(QUERY).bind(token_hash).bind(Utc::now()).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        Ok(row.map(|r| r.get::<String, _>("user_id")))
    }
}
