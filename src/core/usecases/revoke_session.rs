//! Use case: RevokeSession
//!
//! Orchestrates session revocation (logout).
//!
//! Responsibilities:
//! - Resolve the session to revoke, either directly by id or by validating
//!   a presented refresh token to recover its `sid`
//! - Tear down the session and its entire refresh-token family, or every
//!   session belonging to the user when `device == "all"`

use std::sync::Arc;

use crate::core::error::{CoreError, InvariantError};
use crate::core::usecases::ports::{SessionStore, TokenIssuer};

/// Input contract for RevokeSession use case.
pub struct RevokeSessionInput {
    pub session_id: Option<String>,
    pub refresh_token: Option<String>,
    /// When set to `"all"`, revoke every session for the resolved user
    /// instead of just the one identified above.
    pub device: Option<String>,
}

/// Output contract for RevokeSession use case.
#[derive(Debug)]
pub enum RevokeSessionOutput {
    Session { revoked: bool, session_id: String },
    AllForUser { revoked: bool, user_id: String },
}

/// Use case for revoking a session (logout).
pub struct RevokeSession {
    session_store: Arc<dyn SessionStore>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl RevokeSession {
    pub fn new(session_store: Arc<dyn SessionStore>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { session_store, token_issuer }
    }

    pub async fn execute(&self, input: RevokeSessionInput) -> Result<RevokeSessionOutput, CoreError> {
        let (session_id, refresh_user_id) = match (input.session_id, input.refresh_token) {
            (Some(sid), _) => (sid, None),
            (None, Some(refresh_token)) => {
                let claims = self.token_issuer.validate(&refresh_token).await?;
                let sid = claims
                    .sid
                    .clone()
                    .ok_or_else(|| InvariantError::inconsistent_state("refresh token missing sid"))?;
                (sid, claims.identity.user_id)
            }
            (None, None) => {
                return Err(InvariantError::violated("either session_id or refresh_token must be provided").into());
            }
        };

        let revoke_all = input.device.as_deref() == Some("all");
        if !revoke_all {
            self.session_store.revoke_session(&session_id).await?;
            return Ok(RevokeSessionOutput::Session {
                revoked: true,
                session_id,
            });
        }

        let user_id = match refresh_user_id {
            Some(user_id) => user_id,
            None => {
                let session = self
                    .session_store
                    .find_session(&session_id)
                    .await?
                    .ok_or_else(|| CoreError::not_found("Session", &session_id))?;
                session.user_id
            }
        };

        self.session_store.revoke_all_for_user(&user_id).await?;
        Ok(RevokeSessionOutput::AllForUser {
            revoked: true,
            user_id,
        })
    }
}
