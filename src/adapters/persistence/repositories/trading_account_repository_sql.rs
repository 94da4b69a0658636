//! SQL-backed implementation of the `TradingAccountRepository` port.
//!
//! Implements queries against the `trading_accounts` table. Credential
//! bytes never pass through here; only the `VaultRef` id does.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::adapters::persistence::database::Database;
use crate::core::error::{CoreError, InvariantError};
use crate::core::trading_account::{TradingAccount, TradingAccountStatus};
use crate::core::usecases::ports::TradingAccountRepository;
use crate::core::vault::VaultRef;

pub struct TradingAccountRepositorySql {
    db: Database,
}

impl TradingAccountRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn map_query_err(e: sqlx::Error) -> CoreError {
    CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("postgres", e.to_string()))
}

fn status_to_str(status: TradingAccountStatus) -> &'static str {
    match status {
        TradingAccountStatus::Active => "active",
        TradingAccountStatus::NeedsReauth => "needs_reauth",
        TradingAccountStatus::Revoked => "revoked",
    }
}

fn status_from_str(status: &str) -> Result<TradingAccountStatus, CoreError> {
    match status {
        "active" => Ok(TradingAccountStatus::Active),
        "needs_reauth" => Ok(TradingAccountStatus::NeedsReauth),
        "revoked" => Ok(TradingAccountStatus::Revoked),
        other => Err(CoreError::Internal(InvariantError::inconsistent_state(format!(
            "unrecognized trading account status in storage: {other}"
        )))),
    }
}

fn row_to_account(row: sqlx::postgres::PgRow) -> Result<TradingAccount, CoreError> {
    Ok(TradingAccount {
        id: row.get("id"),
        owner_user_id: row.get("owner_user_id"),
        broker_tag: row.get("broker_tag"),
        broker_account_handle: row.get("broker_account_handle"),
        status: status_from_str(row.get("status"))?,
        vault_ref: VaultRef::new(row.get::<String, _>("vault_ref")),
        broker_profile: row.get("broker_profile"),
    })
}

#[async_trait]
impl TradingAccountRepository for TradingAccountRepositorySql {
    async fn create(&self, account: &TradingAccount) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            INSERT INTO trading_accounts
                (id, owner_user_id, broker_tag, broker_account_handle, status, vault_ref, broker_profile, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        "#;
        sqlx::query(QUERY)
            .bind(&account.id)
            .bind(&account.owner_user_id)
            .bind(&account.broker_tag)
            .bind(&account.broker_account_handle)
            .bind(status_to_str(account.status))
            .bind(account.vault_ref.id())
            .bind(&account.broker_profile)
            .bind(Utc::now())
            .execute(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TradingAccount>, CoreError> {
        const QUERY: &str = r#"
            SELECT id, owner_user_id, broker_tag, broker_account_handle, status, vault_ref, broker_profile
            FROM trading_accounts
            WHERE id = $1
        "#;
        let row = sqlx::query(QUERY).bind(id).fetch_optional(self.db.pool()).await.map_err(map_query_err)?;
        row.map(row_to_account).transpose()
    }

    async fn find_by_owner(&self, owner_user_id: &str) -> Result<Vec<TradingAccount>, CoreError> {
        const QUERY: &str = r#"
            SELECT id, owner_user_id, broker_tag, broker_account_handle, status, vault_ref, broker_profile
            FROM trading_accounts
            WHERE owner_user_id = $1
            ORDER BY created_at ASC
        "#;
        let rows = sqlx::query(QUERY).bind(owner_user_id).fetch_all(self.db.pool()).await.map_err(map_query_err)?;
        rows.into_iter().map(row_to_account).collect()
    }

    async fn save(&self, account: &TradingAccount) -> Result<(), CoreError> {
        const QUERY: &str = r#"
            UPDATE trading_accounts
            SET status = $1, vault_ref = $2, broker_profile = $3, updated_at = $4
            WHERE id = $5
        "#;
        sqlx::query(QUERY)
            .bind(status_to_str(account.status))
            .bind(account.vault_ref.id())
            .bind(&account.broker_profile)
            .bind(Utc::now())
            .bind(&account.id)
            .execute(self.db.pool())
            .await
            .map_err(map_query_err)?;
        Ok(())
    }
}
