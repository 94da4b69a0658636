//! Composition root binary.
//!
//! Wires a `KeyRing` and serves it behind the JWKS + health routes in
//! [`auth_core::adapters::http`]. This is the only place in the crate that
//! owns a `tokio::main` and a listening socket — everything else is a
//! library consumed directly by whatever embeds it.

use std::sync::Arc;

use auth_core::adapters::crypto::keyring::RsaKeyRing;
use auth_core::adapters::http::{create_router, AppState};
use auth_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;
    let key_ring = Arc::new(RsaKeyRing::new().await?);
    let state = AppState::new(key_ring);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_bind_addr).await?;
    tracing::info!(addr = %config.http_bind_addr, "serving JWKS and health routes");
    axum::serve(listener, app).await?;
    Ok(())
}
