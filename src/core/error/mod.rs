// Core error types for the authentication domain.

// This module defines the complete error semantics for the auth core layer.
/*
Errors are organized by ownership and responsibility:
 - [`AuthenticationError`]: Identity could not be proven
 - [`CredentialError`]: Credentials are invalid or malformed
 - [`TokenError`]: Trust artifacts are invalid or compromised
 - [`PolicyError`]: An authorization decision could not be reached
 - [`VaultError`]: Envelope-encrypted secret storage failed
 - [`MfaError`]: Multi-factor enrollment or verification failed
 - [`InvariantError`]: Internal invariants were violated (programmer errors)

Design Principles:
 - **No transport concepts**: Errors contain no HTTP status codes or similar
 - **No exceptions**: Errors are values, not panics
 - **Domain language**: Errors express intent, not technical implementation
 - **Immutable**: All errors are value objects with no mutable state
  - **Stable**: Errors remain unchanged across refactors
*/
pub mod authentication_error;
pub mod credential_error;
pub mod token_error;
pub mod invariant_error;
pub mod policy_error;
pub mod vault_error;
pub mod mfa_error;

pub use authentication_error::AuthenticationError;
pub use credential_error::CredentialError;
pub use token_error::TokenError;
pub use invariant_error::InvariantError;
pub use policy_error::PolicyError;
pub use vault_error::VaultError;
pub use mfa_error::MfaError;

#[cfg(test)]
mod tests;

/// Core error type that encompasses all authentication domain failures.
///
/// This is the taxonomy the `usecases` layer returns to its callers. It is
/// coarser than the per-component error types above: those stay typed at the
/// adapter/port boundary for logging and `AuditLog` detail, and get folded
/// into one of these buckets wherever a use case needs to decide how to
/// respond (retry, 4xx, 5xx, deny).
#[derive(Debug, Clone)]
pub enum CoreError {
    /// Input failed a schema or strength check.
    Validation(CredentialError),
    /// Identity could not be proven (bad credentials, locked account, ...).
    Authentication(AuthenticationError),
    /// A trust artifact (JWT) failed validation.
    Token(TokenError),
    /// A policy decision denied the action.
    Authorization(PolicyError),
    /// A referenced entity does not exist.
    NotFound { entity: String, id: String },
    /// A uniqueness or state precondition was violated.
    Conflict { reason: String },
    /// A rate-limit window was exhausted.
    RateLimited { scope: String, retry_after_secs: u64 },
    /// A refresh-token JTI was presented a second time.
    ReuseDetected { family_id: String },
    /// A required dependency (KV, DB, KMS, IdP) was unavailable or timed out.
    DependencyUnavailable(InvariantError),
    /// A logic error that should never occur in correct code.
    Internal(InvariantError),
}

impl CoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn rate_limited(scope: impl Into<String>, retry_after_secs: u64) -> Self {
        Self::RateLimited {
            scope: scope.into(),
            retry_after_secs,
        }
    }

    pub fn reuse_detected(family_id: impl Into<String>) -> Self {
        Self::ReuseDetected {
            family_id: family_id.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    pub fn is_reuse_detected(&self) -> bool {
        matches!(self, Self::ReuseDetected { .. })
    }

    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(self, Self::DependencyUnavailable(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    pub fn as_validation(&self) -> Option<&CredentialError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_authentication(&self) -> Option<&AuthenticationError> {
        match self {
            Self::Authentication(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenError> {
        match self {
            Self::Token(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_authorization(&self) -> Option<&PolicyError> {
        match self {
            Self::Authorization(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation error: {}", err),
            Self::Authentication(err) => write!(f, "Authentication error: {}", err),
            Self::Token(err) => write!(f, "Token error: {}", err),
            Self::Authorization(err) => write!(f, "Authorization error: {}", err),
            Self::NotFound { entity, id } => write!(f, "{} not found: {}", entity, id),
            Self::Conflict { reason } => write!(f, "Conflict: {}", reason),
            Self::RateLimited { scope, retry_after_secs } => write!(
                f,
                "Rate limit exceeded for {}, retry after {}s",
                scope, retry_after_secs
            ),
            Self::ReuseDetected { family_id } => {
                write!(f, "Refresh token reuse detected in family {}", family_id)
            }
            Self::DependencyUnavailable(err) => write!(f, "Dependency unavailable: {}", err),
            Self::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl From<CredentialError> for CoreError {
    fn from(err: CredentialError) -> Self {
        CoreError::Validation(err)
    }
}

impl From<AuthenticationError> for CoreError {
    fn from(err: AuthenticationError) -> Self {
        CoreError::Authentication(err)
    }
}

impl From<TokenError> for CoreError {
    fn from(err: TokenError) -> Self {
        CoreError::Token(err)
    }
}

impl From<PolicyError> for CoreError {
    fn from(err: PolicyError) -> Self {
        CoreError::Authorization(err)
    }
}

impl From<InvariantError> for CoreError {
    fn from(err: InvariantError) -> Self {
        match err {
            InvariantError::DependencyUnavailable { .. } => CoreError::DependencyUnavailable(err),
            _ => CoreError::Internal(err),
        }
    }
}

impl From<VaultError> for CoreError {
    fn from(err: VaultError) -> Self {
        match err {
            VaultError::NotFound { vault_ref } => CoreError::NotFound {
                entity: "vault_secret".to_string(),
                id: vault_ref,
            },
            VaultError::DecryptFailed { vault_ref } => CoreError::Internal(
                InvariantError::violated(format!("vault decrypt failed for {}", vault_ref)),
            ),
            VaultError::KmsUnavailable { reason } => {
                CoreError::DependencyUnavailable(InvariantError::dependency_unavailable("kms", reason))
            }
        }
    }
}

impl From<MfaError> for CoreError {
    fn from(err: MfaError) -> Self {
        match err {
            MfaError::InvalidCode => {
                CoreError::Authentication(AuthenticationError::incomplete_flow("mfa_code_invalid"))
            }
            MfaError::ChallengeExpired => {
                CoreError::Authentication(AuthenticationError::incomplete_flow("mfa_challenge_expired"))
            }
            MfaError::AlreadyEnrolled => CoreError::Conflict {
                reason: "MFA is already enrolled".to_string(),
            },
            MfaError::NotEnrolled => CoreError::NotFound {
                entity: "totp_secret".to_string(),
                id: String::new(),
            },
        }
    }
}
