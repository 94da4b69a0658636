//! Process configuration, loaded from the environment.
//!
//! Every field has a sane default so the crate can be exercised locally
//! without a `.env` file; production deployments are expected to override
//! the secrets (`database_url`, `redis_url`, `kms_key_id`) explicitly.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::adapters::persistence::database::PoolConfig;
use crate::core::usecases::policies::{LockoutPolicy, TokenPolicy};

/// Top-level application configuration, assembled once at startup and
/// threaded down into adapter constructors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub redis_url: String,
    pub kms_key_id: String,
    pub http_bind_addr: String,
    pub pool: PoolConfig,
    pub token: TokenSettings,
    pub lockout: LockoutPolicy,
    pub policy_cache_ttl: Duration,
    pub audit_retention_days: u32,
}

/// Token-issuance knobs; mirrors `core::usecases::policies::TokenPolicy` but
/// also carries the service-token lifetime, which the core policy type does
/// not need to know about.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
    pub service_ttl_secs: u64,
    pub one_time_refresh: bool,
}

impl TokenSettings {
    pub fn token_policy(&self) -> TokenPolicy {
        TokenPolicy::new(self.access_ttl_secs, self.refresh_ttl_secs, self.one_time_refresh)
    }
}

impl AppConfig {
    /// Load configuration from process environment variables, applying
    /// `.env` (if present) first. Fails only when a present variable cannot
    /// be parsed; absent variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_url: env_string("AUTH_DATABASE_URL", "postgres://localhost/auth"),
            redis_url: env_string("AUTH_REDIS_URL", "redis://localhost:6379"),
            kms_key_id: env_string("AUTH_KMS_KEY_ID", "local-dev-kms-key"),
            http_bind_addr: env_string("AUTH_HTTP_BIND_ADDR", "0.0.0.0:8080"),
            pool: PoolConfig {
                max_connections: env_parsed("AUTH_DB_MAX_CONNECTIONS", 20)?,
                idle_timeout: Duration::from_secs(env_parsed("AUTH_DB_IDLE_TIMEOUT_SECS", 600)?),
                max_lifetime: Duration::from_secs(env_parsed("AUTH_DB_MAX_LIFETIME_SECS", 1800)?),
            },
            token: TokenSettings {
                access_ttl_secs: env_parsed("AUTH_ACCESS_TTL_SECS", 15 * 60)?,
                refresh_ttl_secs: env_parsed("AUTH_REFRESH_TTL_SECS", 90 * 24 * 60 * 60)?,
                service_ttl_secs: env_parsed("AUTH_SERVICE_TTL_SECS", 60 * 60)?,
                one_time_refresh: env_parsed("AUTH_ONE_TIME_REFRESH", true)?,
            },
            lockout: LockoutPolicy::new(
                env_parsed("AUTH_LOCKOUT_MAX_ATTEMPTS", 5)?,
                env_parsed("AUTH_LOCKOUT_DURATION_SECS", 15 * 60)?,
                env_parsed("AUTH_LOCKOUT_RESET_ON_SUCCESS", true)?,
            ),
            policy_cache_ttl: Duration::from_secs(env_parsed("AUTH_POLICY_CACHE_TTL_SECS", 60)?),
            audit_retention_days: env_parsed("AUTH_AUDIT_RETENTION_DAYS", 730)?,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("invalid value for {}", key)),
        Err(_) => Ok(default),
    }
}
