//! Redis-backed implementation of the `SessionStore` port.
//!
//! Key scheme:
//!  - `session:{sid}`         hash — session fields, including `family_id`
//!    of its refresh-token family for O(1) teardown on revoke
//!  - `user_sessions:{uid}`   set  — session ids belonging to a user
//!  - `sessions:expiry`       zset — session id scored by absolute expiry,
//!    swept by `delete_expired`
//!  - `refresh:{jti}`         hash — refresh-token-family member
//!  - `family:{fid}`          set  — every jti ever issued in a family
//!  - `ratelimit:{scope}:{id}:{bucket}` counter — fixed-window rate limit

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, Script};

use crate::core::error::{CoreError, InvariantError};
use crate::core::session::{RateLimitDecision, RateLimitWindow, RefreshTokenRecord, RotationOutcome, Session, SessionPersistence};
use crate::core::usecases::ports::{Clock, SessionStore};

use super::redis_conn::RedisConn;

/// Inactivity TTL layered on top of each session's absolute Redis expiry;
/// a session untouched for this long is stale even if its absolute TTL
/// has not yet elapsed.
const INACTIVITY_TTL_SECS: i64 = 14 * 24 * 3600;

fn map_redis_err(e: redis::RedisError) -> CoreError {
    CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("redis", e.to_string()))
}

fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::Internal(InvariantError::inconsistent_state(format!("invalid timestamp: {e}"))))
}

fn session_key(sid: &str) -> String {
    format!("session:{sid}")
}
fn user_sessions_key(uid: &str) -> String {
    format!("user_sessions:{uid}")
}
fn refresh_key(jti: &str) -> String {
    format!("refresh:{jti}")
}
fn family_key(fid: &str) -> String {
    format!("family:{fid}")
}

const EXPIRY_ZSET: &str = "sessions:expiry";

fn persistence_to_str(p: SessionPersistence) -> &'static str {
    match p {
        SessionPersistence::Persistent => "persistent",
        SessionPersistence::Ephemeral => "ephemeral",
    }
}

fn persistence_from_str(s: &str) -> SessionPersistence {
    match s {
        "persistent" => SessionPersistence::Persistent,
        _ => SessionPersistence::Ephemeral,
    }
}

fn session_from_hash(sid: &str, hash: &HashMap<String, String>) -> Option<Session> {
    Some(Session {
        id: sid.to_string(),
        user_id: hash.get("user_id")?.clone(),
        device_fingerprint: hash.get("device_fingerprint").cloned().unwrap_or_default(),
        creating_ip: hash.get("creating_ip").cloned().unwrap_or_default(),
        created_at: hash.get("created_at")?.clone(),
        last_active_at: hash.get("last_active_at")?.clone(),
        mfa_verified: hash.get("mfa_verified").map(|v| v == "true").unwrap_or(false),
        persistence: hash.get("persistence").map(|v| persistence_from_str(v)).unwrap_or(SessionPersistence::Ephemeral),
    })
}

/// Lua source for atomic refresh-token rotation and reuse teardown.
///
/// KEYS[1] = refresh:{presented_jti}
/// ARGV[1] = next jti, ARGV[2] = next family_id (unused, inherited), ARGV[3] = next user_id,
/// ARGV[4] = next session_id, ARGV[5] = next parent_jti
const ROTATE_FAMILY_SCRIPT: &str = r#"
local jti_key = KEYS[1]
if redis.call('EXISTS', jti_key) == 0 then
    return {'unknown'}
end
local consumed = redis.call('HGET', jti_key, 'consumed')
local family_id = redis.call('HGET', jti_key, 'family_id')
if consumed == 'true' then
    local family_members = redis.call('SMEMBERS', 'family:' .. family_id)
    local session_id = redis.call('HGET', jti_key, 'session_id')
    for _, member in ipairs(family_members) do
        redis.call('DEL', 'refresh:' .. member)
    end
    redis.call('DEL', 'family:' .. family_id)
    if session_id then
        local user_id = redis.call('HGET', 'session:' .. session_id, 'user_id')
        redis.call('DEL', 'session:' .. session_id)
        redis.call('ZREM', 'sessions:expiry', session_id)
        if user_id then
            redis.call('SREM', 'user_sessions:' .. user_id, session_id)
        end
    end
    return {'reuse', family_id}
end

local new_jti = ARGV[1]
local new_user_id = ARGV[3]
local new_session_id = ARGV[4]
local new_parent_jti = ARGV[5]

redis.call('HSET', jti_key, 'consumed', 'true', 'rotated_to', new_jti)
redis.call('HSET', 'refresh:' .. new_jti,
    'jti', new_jti,
    'family_id', family_id,
    'user_id', new_user_id,
    'session_id', new_session_id,
    'parent_jti', new_parent_jti,
    'consumed', 'false')
redis.call('SADD', 'family:' .. family_id, new_jti)
return {'rotated', new_jti}
"#;

/// Redis-backed session and refresh-token-family store.
pub struct RedisSessionStore {
    conn: RedisConn,
    clock: std::sync::Arc<dyn Clock>,
    rotate_script: Script,
}

impl RedisSessionStore {
    pub fn new(conn: RedisConn, clock: std::sync::Arc<dyn Clock>) -> Self {
        Self {
            conn,
            clock,
            rotate_script: Script::new(ROTATE_FAMILY_SCRIPT),
        }
    }

    /// A session is live only if both its absolute TTL (enforced by Redis
    /// itself dropping the key) and the inactivity TTL hold; the latter
    /// is recomputed here since Redis's own key TTL only tracks the former.
    fn is_live(&self, session: &Session) -> bool {
        let Ok(last_active) = parse_rfc3339(&session.last_active_at) else {
            return false;
        };
        self.clock.now() - last_active <= chrono::Duration::seconds(INACTIVITY_TTL_SECS)
    }

    async fn teardown_session(&self, session_id: &str) -> Result<(), CoreError> {
        let mut conn = self.conn.manager();
        let hash: HashMap<String, String> = conn.hgetall(session_key(session_id)).await.map_err(map_redis_err)?;
        if hash.is_empty() {
            return Ok(());
        }
        let user_id = hash.get("user_id").cloned();
        let family_id = hash.get("family_id").cloned();

        if let Some(family_id) = family_id {
            let members: Vec<String> = conn.smembers(family_key(&family_id)).await.map_err(map_redis_err)?;
            for jti in members {
                let _: () = conn.del(refresh_key(&jti)).await.map_err(map_redis_err)?;
            }
            let _: () = conn.del(family_key(&family_id)).await.map_err(map_redis_err)?;
        }

        let _: () = conn.del(session_key(session_id)).await.map_err(map_redis_err)?;
        let _: () = conn.zrem(EXPIRY_ZSET, session_id).await.map_err(map_redis_err)?;
        if let Some(user_id) = user_id {
            let _: () = conn.srem(user_sessions_key(&user_id), session_id).await.map_err(map_redis_err)?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create_session(&self, session: &Session, initial_refresh: &RefreshTokenRecord) -> Result<(), CoreError> {
        let mut conn = self.conn.manager();
        let created_at = parse_rfc3339(&session.created_at)?;
        let expires_at = created_at + chrono::Duration::seconds(session.persistence.default_ttl_secs() as i64);

        let mut pipe = redis::pipe();
        pipe.atomic()
            .hset_multiple(
                session_key(&session.id),
                &[
                    ("user_id", session.user_id.clone()),
                    ("device_fingerprint", session.device_fingerprint.clone()),
                    ("creating_ip", session.creating_ip.clone()),
                    ("created_at", session.created_at.clone()),
                    ("last_active_at", session.last_active_at.clone()),
                    ("mfa_verified", session.mfa_verified.to_string()),
                    ("persistence", persistence_to_str(session.persistence).to_string()),
                    ("family_id", initial_refresh.family_id.clone()),
                ],
            )
            .ignore()
            .sadd(user_sessions_key(&session.user_id), session.id.clone())
            .ignore()
            .zadd(EXPIRY_ZSET, session.id.clone(), expires_at.timestamp())
            .ignore()
            .hset_multiple(
                refresh_key(&initial_refresh.jti),
                &[
                    ("jti", initial_refresh.jti.clone()),
                    ("family_id", initial_refresh.family_id.clone()),
                    ("user_id", initial_refresh.user_id.clone()),
                    ("session_id", initial_refresh.session_id.clone()),
                    ("parent_jti", initial_refresh.parent_jti.clone().unwrap_or_default()),
                    ("consumed", initial_refresh.consumed.to_string()),
                ],
            )
            .ignore()
            .sadd(family_key(&initial_refresh.family_id), initial_refresh.jti.clone())
            .ignore();

        pipe.query_async::<()>(&mut conn).await.map_err(map_redis_err)?;
        Ok(())
    }

    async fn find_session(&self, session_id: &str) -> Result<Option<Session>, CoreError> {
        let mut conn = self.conn.manager();
        let hash: HashMap<String, String> = conn.hgetall(session_key(session_id)).await.map_err(map_redis_err)?;
        if hash.is_empty() {
            return Ok(None);
        }
        let Some(session) = session_from_hash(session_id, &hash) else {
            return Ok(None);
        };
        if !self.is_live(&session) {
            self.teardown_session(session_id).await?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn touch_session(&self, session_id: &str, now: &str) -> Result<(), CoreError> {
        let mut conn = self.conn.manager();
        let exists: bool = conn.exists(session_key(session_id)).await.map_err(map_redis_err)?;
        if !exists {
            return Ok(());
        }
        let _: () = conn
            .hset(session_key(session_id), "last_active_at", now)
            .await
            .map_err(map_redis_err)?;
        Ok(())
    }

    async fn rotate_family(&self, presented_jti: &str, next: RefreshTokenRecord) -> Result<RotationOutcome, CoreError> {
        let mut conn = self.conn.manager();
        let result: Vec<String> = self
            .rotate_script
            .key(refresh_key(presented_jti))
            .arg(&next.jti)
            .arg(&next.family_id)
            .arg(&next.user_id)
            .arg(&next.session_id)
            .arg(next.parent_jti.clone().unwrap_or_default())
            .invoke_async(&mut conn)
            .await
            .map_err(map_redis_err)?;

        match result.first().map(String::as_str) {
            Some("rotated") => Ok(RotationOutcome::Rotated {
                new_jti: result.get(1).cloned().unwrap_or_else(|| next.jti.clone()),
            }),
            Some("reuse") => Ok(RotationOutcome::ReuseDetected {
                family_id: result.get(1).cloned().unwrap_or_default(),
            }),
            _ => Ok(RotationOutcome::UnknownToken),
        }
    }

    async fn revoke_session(&self, session_id: &str) -> Result<(), CoreError> {
        self.teardown_session(session_id).await
    }

    async fn revoke_all_for_user(&self, user_id: &str) -> Result<(), CoreError> {
        let mut conn = self.conn.manager();
        let sessions: Vec<String> = conn.smembers(user_sessions_key(user_id)).await.map_err(map_redis_err)?;
        for session_id in sessions {
            self.teardown_session(&session_id).await?;
        }
        let _: () = conn.del(user_sessions_key(user_id)).await.map_err(map_redis_err)?;
        Ok(())
    }

    async fn delete_expired(&self, now: &str) -> Result<(), CoreError> {
        let now = parse_rfc3339(now)?;
        let mut conn = self.conn.manager();
        let expired: Vec<String> = conn
            .zrangebyscore(EXPIRY_ZSET, f64::NEG_INFINITY, now.timestamp() as f64)
            .await
            .map_err(map_redis_err)?;
        for session_id in expired {
            self.teardown_session(&session_id).await?;
        }
        Ok(())
    }

    async fn check_rate_limit(&self, key: &str, now: &str, limit: u32, window_seconds: u64) -> Result<RateLimitDecision, CoreError> {
        let now = parse_rfc3339(now)?;
        let bucket = now.timestamp() as u64 / window_seconds;
        let counter_key = format!("ratelimit:{key}:{bucket}");

        let mut conn = self.conn.manager();
        let count: u32 = conn.incr(&counter_key, 1u32).await.map_err(map_redis_err)?;
        if count == 1 {
            let _: () = conn.expire(&counter_key, window_seconds as i64).await.map_err(map_redis_err)?;
        }

        Ok(RateLimitWindow::new(key, "", limit, window_seconds).decide(count))
    }
}
