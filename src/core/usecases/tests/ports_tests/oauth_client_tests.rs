//! Tests for OAuthClient port.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::OAuthProvider;
use crate::core::usecases::ports::{OAuthClient, OAuthStart, VerifiedOAuthIdentity};

struct FixedOAuthClient {
    valid_state: Mutex<Option<String>>,
}

#[async_trait]
impl OAuthClient for FixedOAuthClient {
    async fn begin(&self, _provider: OAuthProvider) -> Result<OAuthStart, CoreError> {
        let state = "state-123".to_string();
        *self.valid_state.lock().unwrap() = Some(state.clone());
        Ok(OAuthStart {
            authorize_url: "https://accounts.google.com/o/oauth2/v2/auth?state=state-123".to_string(),
            state,
        })
    }

    async fn exchange(&self, provider: OAuthProvider, code: &str, state: &str) -> Result<VerifiedOAuthIdentity, CoreError> {
        if self.valid_state.lock().unwrap().as_deref() != Some(state) {
            return Err(AuthenticationError::incomplete_flow("oauth_state_unknown_or_expired").into());
        }
        if code != "good-code" {
            return Err(AuthenticationError::incomplete_flow("oauth_code_rejected").into());
        }
        Ok(VerifiedOAuthIdentity {
            provider,
            provider_subject: "google-sub-1".to_string(),
            email: "trader@example.com".to_string(),
        })
    }
}

fn client() -> FixedOAuthClient {
    FixedOAuthClient { valid_state: Mutex::new(None) }
}

#[tokio::test]
async fn begin_returns_a_state_that_exchange_later_accepts() {
    let client = client();
    let start = client.begin(OAuthProvider::Google).await.unwrap();

    let identity = client.exchange(OAuthProvider::Google, "good-code", &start.state).await.unwrap();
    assert_eq!(identity.email, "trader@example.com");
}

#[tokio::test]
async fn exchange_rejects_an_unknown_state() {
    let client = client();
    client.begin(OAuthProvider::Google).await.unwrap();

    let err = client.exchange(OAuthProvider::Google, "good-code", "not-the-issued-state").await.unwrap_err();
    assert!(matches!(err, CoreError::Authentication(_)));
}
