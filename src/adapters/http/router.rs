//! Route table for the composition root: JWKS publication and a liveness
//! probe, nothing else. There is no auth middleware, CORS layer, or
//! versioned API surface here — downstream services that need to call
//! into the auth control plane do so through the use cases directly, not
//! over HTTP.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::adapters::http::state::AppState;
use crate::core::keyring::JwksSnapshot;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/.well-known/jwks.json", get(jwks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct JwksResponse {
    keys: Vec<Value>,
}

async fn jwks(State(state): State<AppState>) -> impl IntoResponse {
    match state.key_ring.jwks().await {
        Ok(snapshot) => Json(JwksResponse { keys: jwk_descriptors_to_json(&snapshot) }).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to read JWKS snapshot");
            (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "jwks unavailable").into_response()
        }
    }
}

fn jwk_descriptors_to_json(snapshot: &JwksSnapshot) -> Vec<Value> {
    snapshot
        .keys
        .iter()
        .map(|descriptor| {
            let mut params: Value = serde_json::from_str(&descriptor.public_params)
                .unwrap_or_else(|_| serde_json::json!({}));
            if let Value::Object(map) = &mut params {
                map.insert("kid".to_string(), Value::String(descriptor.kid.clone()));
                map.insert("kty".to_string(), Value::String(descriptor.kty.to_string()));
                map.insert("use".to_string(), Value::String(descriptor.use_.to_string()));
                map.insert("alg".to_string(), Value::String(descriptor.algorithm.to_string()));
            }
            params
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::crypto::keyring::RsaKeyRing;

    async fn test_state() -> AppState {
        let ring = RsaKeyRing::new().await.expect("key ring");
        AppState::new(Arc::new(ring))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = create_router(test_state().await);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn jwks_publishes_active_key() {
        let app = create_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/.well-known/jwks.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
