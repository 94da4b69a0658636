//! Port for the OAuth2/OIDC authorization-code flow this core runs as a
//! *client* of external identity providers (Google only, per the closed
//! provider list in `core::identity::OAuthProvider`).

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::identity::OAuthProvider;

/// An authorize-url/CSRF-state pair handed back to the caller on `begin`,
/// to redirect the user-agent to the provider. `state` must be presented
/// back unchanged to `exchange`; the adapter owns matching it against what
/// it issued and rejects anything else as a CSRF attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthStart {
    pub authorize_url: String,
    pub state: String,
}

/// A provider-verified identity recovered from a completed authorization
/// code exchange. `email` is asserted by the provider's ID token, never by
/// an unverified profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedOAuthIdentity {
    pub provider: OAuthProvider,
    pub provider_subject: String,
    pub email: String,
}

/// Contract for the OAuth2/OIDC client flow.
#[async_trait]
pub trait OAuthClient: Send + Sync {
	/// Begin a login: produce the URL to redirect the user-agent to and the
	/// CSRF state it must come back with.
	async fn begin(&self, provider: OAuthProvider) -> Result<OAuthStart, CoreError>;

	/// Complete a login: verify `state` against what `begin` issued, then
	/// exchange `code` with the provider and return the verified identity.
	async fn exchange(&self, provider: OAuthProvider, code: &str, state: &str) -> Result<VerifiedOAuthIdentity, CoreError>;
}
