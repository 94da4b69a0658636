//! Redis connection manager wrapper.

use redis::aio::ConnectionManager;

use crate::core::error::{CoreError, InvariantError};

fn map_redis_err(e: redis::RedisError) -> CoreError {
    CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("redis", e.to_string()))
}

/// Thin wrapper around a reconnecting Redis connection manager.
///
/// `ConnectionManager` is cheap to clone (it's a handle over a shared
/// multiplexed connection that reconnects automatically), so this type
/// derives `Clone` the same way `Database` does over its pool.
#[derive(Clone)]
pub struct RedisConn {
    manager: ConnectionManager,
}

impl RedisConn {
    /// Connect to Redis at `url` (e.g. `redis://127.0.0.1:6379/0`).
    pub async fn connect(url: &str) -> Result<Self, CoreError> {
        let client = redis::Client::open(url).map_err(map_redis_err)?;
        let manager = client.get_connection_manager().await.map_err(map_redis_err)?;
        Ok(Self { manager })
    }

    pub fn manager(&self) -> ConnectionManager {
        self.manager.clone()
    }
}
