//! Use case: IssueSession
//!
//! Orchestrates session creation with access and refresh token issuance.
//!
//! Responsibilities:
//! - Generate session id and refresh-token family/jti
//! - Persist the session and the first refresh-token family record
//! - Mint access and refresh tokens via TokenIssuer
//!
//! Does NOT:
//! - Verify credentials (see AuthenticateUser)
//! - Decide MFA status (the caller passes it in as already satisfied or not)

use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::IdentityClaims;
use crate::core::session::{RefreshTokenRecord, Session, SessionPersistence};
use crate::core::token::{TokenClaims, TokenKind};
use crate::core::usecases::policies::TokenPolicy;
use crate::core::usecases::ports::{Clock, IssuedToken, SessionStore, TokenIssuer};

/// Input contract for IssueSession use case.
pub struct IssueSessionInput {
    pub user_id: String,
    pub roles: Vec<String>,
    pub acct_ids: Vec<String>,
    pub mfa_verified: bool,
    pub device_fingerprint: String,
    pub creating_ip: String,
    pub persistence: SessionPersistence,
}

/// Output contract for IssueSession use case.
pub struct IssueSessionOutput {
    pub access_token: IssuedToken,
    pub refresh_token: IssuedToken,
    pub session_id: String,
    pub expires_in: u64,
}

/// Use case for issuing a new session with an access/refresh token pair.
pub struct IssueSession {
    session_store: Arc<dyn SessionStore>,
    token_issuer: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
    token_policy: TokenPolicy,
}

impl IssueSession {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        token_issuer: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
        token_policy: TokenPolicy,
    ) -> Self {
        Self {
            session_store,
            token_issuer,
            clock,
            token_policy,
        }
    }

    pub async fn execute(&self, input: IssueSessionInput) -> Result<IssueSessionOutput, CoreError> {
        let now = self.clock.now();
        let now_str = now.to_rfc3339();
        let session_id = new_uuid();
        let family_id = new_uuid();
        let jti = new_uuid();

        let session = Session::new(
            &session_id,
            &input.user_id,
            &input.device_fingerprint,
            &input.creating_ip,
            &now_str,
            input.persistence,
        )
        .with_mfa_verified(input.mfa_verified);

        let refresh_record = RefreshTokenRecord::open_family(&jti, &family_id, &input.user_id, &session_id);

        self.session_store.create_session(&session, &refresh_record).await?;

        let identity = IdentityClaims {
            user_id: Some(input.user_id.clone()),
            workspace_id: None,
        };

        let access_expires_at = (now + chrono::Duration::seconds(self.token_policy.access_ttl() as i64)).to_rfc3339();
        let access_claims = TokenClaims::new(identity.clone(), TokenKind::Access, &now_str, access_expires_at)
            .with_sid(&session_id)
            .with_roles(input.roles)
            .with_acct_ids(input.acct_ids)
            .with_mfa(input.mfa_verified);

        let refresh_expires_at = (now + chrono::Duration::seconds(self.token_policy.refresh_ttl() as i64)).to_rfc3339();
        let refresh_claims = TokenClaims::new(identity, TokenKind::Refresh, &now_str, refresh_expires_at)
            .with_sid(&session_id)
            .with_jti(&jti)
            .with_family(&family_id);

        let access_token = self.token_issuer.mint(&access_claims).await?;
        let refresh_token = self.token_issuer.mint(&refresh_claims).await?;

        Ok(IssueSessionOutput {
            access_token,
            refresh_token,
            session_id,
            expires_in: self.token_policy.access_ttl(),
        })
    }
}

fn new_uuid() -> String {
    uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string()
}
