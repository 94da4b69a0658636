//! OAuth2 client implementation of the `OAuthClient` port.

pub mod google_oauth_client;

pub use google_oauth_client::GoogleOAuthClient;
