//! Redis-backed key-value adapters: session storage and refresh-token-family
//! rotation, implementing the `SessionStore` port.

pub mod redis_conn;
pub mod redis_session_store;

pub use redis_conn::RedisConn;
pub use redis_session_store::RedisSessionStore;
