//! Google OAuth2 authorization-code client — the only `OAuthClient`
//! adapter, since `OAuthProvider` is a closed, single-member enum.
//!
//! Runs the standard PKCE authorization-code flow via `oauth2` and fetches
//! the verified identity from Google's userinfo endpoint via `reqwest`.
//! CSRF state and the PKCE verifier it's paired with are tracked here, not
//! in the port, the same way `TotpMfaEngine` keeps its challenge bookkeeping
//! out of `core`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, PkceCodeChallenge, PkceCodeVerifier,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::OAuthProvider;
use crate::core::usecases::ports::{Clock, OAuthClient, OAuthStart, VerifiedOAuthIdentity};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const STATE_TTL_SECS: i64 = 10 * 60;

#[derive(Deserialize)]
struct GoogleUserInfo {
    sub: String,
    email: String,
}

struct PendingExchange {
    verifier: PkceCodeVerifier,
    issued_at: chrono::DateTime<chrono::Utc>,
}

pub struct GoogleOAuthClient {
    client: BasicClient,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
    pending: DashMap<String, PendingExchange>,
}

impl GoogleOAuthClient {
    pub fn new(client_id: String, client_secret: String, redirect_url: String, clock: Arc<dyn Clock>) -> Result<Self, CoreError> {
        let client = BasicClient::new(ClientId::new(client_id))
            .set_client_secret(ClientSecret::new(client_secret))
            .set_auth_uri(AuthUrl::new(GOOGLE_AUTH_URL.to_string()).map_err(|e| {
                CoreError::from(crate::core::error::InvariantError::invalid_configuration(format!("bad google auth url: {e}")))
            })?)
            .set_token_uri(TokenUrl::new(GOOGLE_TOKEN_URL.to_string()).map_err(|e| {
                CoreError::from(crate::core::error::InvariantError::invalid_configuration(format!("bad google token url: {e}")))
            })?)
            .set_redirect_uri(RedirectUrl::new(redirect_url).map_err(|e| {
                CoreError::from(crate::core::error::InvariantError::invalid_configuration(format!("bad redirect url: {e}")))
            })?);

        Ok(Self {
            client,
            http: reqwest::Client::new(),
            clock,
            pending: DashMap::new(),
        })
    }

    fn prune_expired(&self) {
        let now = self.clock.now();
        self.pending.retain(|_, pending| now - pending.issued_at <= chrono::Duration::seconds(STATE_TTL_SECS));
    }
}

#[async_trait]
impl OAuthClient for GoogleOAuthClient {
    async fn begin(&self, provider: OAuthProvider) -> Result<OAuthStart, CoreError> {
        let OAuthProvider::Google = provider;
        self.prune_expired();

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let (authorize_url, csrf_token) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let state = csrf_token.secret().clone();
        self.pending.insert(
            state.clone(),
            PendingExchange {
                verifier: pkce_verifier,
                issued_at: self.clock.now(),
            },
        );

        Ok(OAuthStart {
            authorize_url: authorize_url.to_string(),
            state,
        })
    }

    async fn exchange(&self, provider: OAuthProvider, code: &str, state: &str) -> Result<VerifiedOAuthIdentity, CoreError> {
        let OAuthProvider::Google = provider;

        let (_, pending) = self
            .pending
            .remove(state)
            .ok_or_else(|| AuthenticationError::incomplete_flow("oauth_state_unknown_or_expired"))?;
        if self.clock.now() - pending.issued_at > chrono::Duration::seconds(STATE_TTL_SECS) {
            return Err(AuthenticationError::incomplete_flow("oauth_state_expired").into());
        }

        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(pending.verifier)
            .request_async(&self.http)
            .await
            .map_err(|e| {
                CoreError::from(crate::core::error::InvariantError::dependency_unavailable(
                    "google_oauth",
                    e.to_string(),
                ))
            })?;

        let userinfo: GoogleUserInfo = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .map_err(|e| CoreError::from(crate::core::error::InvariantError::dependency_unavailable("google_oauth", e.to_string())))?
            .json()
            .await
            .map_err(|e| CoreError::from(crate::core::error::InvariantError::dependency_unavailable("google_oauth", e.to_string())))?;

        Ok(VerifiedOAuthIdentity {
            provider: OAuthProvider::Google,
            provider_subject: userinfo.sub,
            email: userinfo.email,
        })
    }
}
