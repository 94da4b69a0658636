//! SQL-backed implementation of the `AuditLog` port.
//!
//! Writes to a single `auth_events` table indexed on `(subject, ts)` and
//! `(event_type, ts)`; physically partitioning it by month is an
//! operational/migration concern, not something this adapter does.
//! Synchronous event types are awaited before `append` returns; buffered
//! types are written from a detached task so a slow insert never adds
//! latency to the call site that logged them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::Row;

use crate::adapters::persistence::database::Database;
use crate::core::audit::{AuditQuery, AuthEvent, WriteMode};
use crate::core::error::{CoreError, InvariantError};

fn map_query_err(e: sqlx::Error) -> CoreError {
    CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("postgres", e.to_string()))
}

fn payload_to_json(payload: &std::collections::HashMap<String, String>) -> JsonValue {
    JsonValue::Object(payload.iter().map(|(k, v)| (k.clone(), JsonValue::String(v.clone()))).collect())
}

fn payload_from_json(value: JsonValue) -> std::collections::HashMap<String, String> {
    match value {
        JsonValue::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        _ => std::collections::HashMap::new(),
    }
}

async fn insert_event(db: &Database, event: &AuthEvent) -> Result<(), CoreError> {
    const QUERY: &str = r#"
        INSERT INTO auth_events
            (event_id, event_type, ts, subject, actor, resource, payload, ip, user_agent_hash, risk_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (event_id) DO NOTHING
    "#;
    let ts: DateTime<Utc> = DateTime::parse_from_rfc3339(&event.timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    sqlx::query(QUERY)
        .bind(&event.event_id)
        .bind(&event.event_type)
        .bind(ts)
        .bind(&event.subject)
        .bind(&event.actor)
        .bind(&event.resource)
        .bind(payload_to_json(&event.payload))
        .bind(&event.ip)
        .bind(&event.user_agent_hash)
        .bind(event.risk_score.map(|r| r as i16))
        .execute(db.pool())
        .await
        .map_err(map_query_err)?;
    Ok(())
}

pub struct AuditLogSql {
    db: Database,
}

impl AuditLogSql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl crate::core::usecases::ports::AuditLog for AuditLogSql {
    async fn append(&self, event: AuthEvent) -> Result<(), CoreError> {
        match event.write_mode() {
            WriteMode::Synchronous => insert_event(&self.db, &event).await,
            WriteMode::Buffered => {
                let db = self.db.clone();
                tokio::spawn(async move {
                    if let Err(err) = insert_event(&db, &event).await {
                        tracing::warn!(error = %err, event_type = %event.event_type, "buffered audit write failed");
                    }
                });
                Ok(())
            }
        }
    }

    async fn query(&self, query: &AuditQuery) -> Result<Vec<AuthEvent>, CoreError> {
        let mut builder = sqlx::QueryBuilder::new(
            "SELECT event_id, event_type, ts, subject, actor, resource, payload, ip, user_agent_hash, risk_score FROM auth_events WHERE 1 = 1",
        );
        if let Some(subject) = &query.subject {
            builder.push(" AND subject = ").push_bind(subject);
        }
        if let Some(event_type) = &query.event_type {
            builder.push(" AND event_type = ").push_bind(event_type);
        }
        if let Some(since) = &query.since {
            let since: DateTime<Utc> = DateTime::parse_from_rfc3339(since)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| CoreError::Internal(InvariantError::inconsistent_state(format!("invalid since: {e}"))))?;
            builder.push(" AND ts >= ").push_bind(since);
        }
        if let Some(until) = &query.until {
            let until: DateTime<Utc> = DateTime::parse_from_rfc3339(until)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| CoreError::Internal(InvariantError::inconsistent_state(format!("invalid until: {e}"))))?;
            builder.push(" AND ts <= ").push_bind(until);
        }
        builder.push(" ORDER BY ts DESC LIMIT 1000");

        let rows = builder.build().fetch_all(self.db.pool()).await.map_err(map_query_err)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let ts: DateTime<Utc> = row.get("ts");
                let risk_score: Option<i16> = row.get("risk_score");
                AuthEvent {
                    event_id: row.get("event_id"),
                    event_type: row.get("event_type"),
                    timestamp: ts.to_rfc3339(),
                    subject: row.get("subject"),
                    actor: row.get("actor"),
                    resource: row.get("resource"),
                    payload: payload_from_json(row.get("payload")),
                    ip: row.get("ip"),
                    user_agent_hash: row.get("user_agent_hash"),
                    risk_score: risk_score.map(|r| r as u8),
                }
            })
            .collect())
    }
}
