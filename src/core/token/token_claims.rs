/// Token claims representing identity context and temporal bounds.
///
/// `TokenClaims` is a data-only type that projects identity information
/// and temporal validity bounds suitable for embedding in a token.
///
/// # Responsibility
///
/// This type answers the question: "What identity and temporal assertions
/// does this token make?" It is intentionally immutable and contains no
/// business logic — it is purely an identity projection.
///
/// # Design Principles
///
/// - **Data-only**: No methods that compute or perform authorization checks
/// - **Immutable**: All fields are public and fixed after construction
/// - **Domain-driven**: Uses domain types like `IdentityClaims` and `TokenLifetime`
/// - **Transport-safe**: Can be safely serialized without exposing secrets
///
/// # Non-Responsibility
///
/// This type does NOT:
/// - Encode permissions or scopes
/// - Encode business rules
/// - Imply authorization sufficiency
/// - Define how claims are serialized

use crate::core::identity::IdentityClaims;

/// Which of the three token shapes a set of claims belongs to.
///
/// Each kind has a distinct extra-claims set; the core never lets a caller
/// build claims that mix them (e.g. a `Service` token with `acct_ids`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
    Service,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
            Self::Service => "service",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identity context: user and workspace identifiers.
    pub identity: IdentityClaims,

    /// Which token shape these claims belong to.
    pub kind: TokenKind,

    /// When the token was issued (as RFC3339 timestamp).
    /// This is used to detect forged or replayed tokens.
    pub issued_at: String,

    /// When the token expires (as RFC3339 timestamp).
    /// After this time, the token is no longer valid.
    pub expires_at: String,

    /// Optional "not before" time (as RFC3339 timestamp).
    /// If present, the token is not valid before this time.
    pub not_before: Option<String>,

    /// Optional list of scopes or capabilities this token grants.
    ///
    /// **Important**: Scopes are context data, not authorization rules.
    /// Authorization decisions MUST NOT be made solely from token scopes.
    /// Scopes indicate what the token claims to grant; enforcement happens elsewhere.
    pub scopes: Option<Vec<String>>,

    /// Session id the token was minted under. Present on Access and Refresh.
    pub sid: Option<String>,

    /// Role names held at mint time. Present on Access only; a stale snapshot,
    /// not re-checked until the next mint (PDP lookups use fresh role state).
    pub roles: Option<Vec<String>>,

    /// Trading account ids the subject may act on. Access only.
    pub acct_ids: Option<Vec<String>>,

    /// Whether the session satisfied MFA at issuance time. Access only.
    pub mfa: Option<bool>,

    /// Refresh-token identifier. Unique per minted refresh token.
    pub jti: Option<String>,

    /// Refresh-token family id; shared by every token descended from one
    /// `createSession` call, used to detect reuse across the whole chain.
    pub family: Option<String>,
}

impl TokenClaims {
    /// Create a new `TokenClaims` with required identity and temporal bounds.
    pub fn new(
        identity: IdentityClaims,
        kind: TokenKind,
        issued_at: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            kind,
            issued_at: issued_at.into(),
            expires_at: expires_at.into(),
            not_before: None,
            scopes: None,
            sid: None,
            roles: None,
            acct_ids: None,
            mfa: None,
            jti: None,
            family: None,
        }
    }

    /// Set an optional "not before" time.
    pub fn with_not_before(mut self, not_before: impl Into<String>) -> Self {
        self.not_before = Some(not_before.into());
        self
    }

    /// Set optional scopes.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn with_acct_ids(mut self, acct_ids: Vec<String>) -> Self {
        self.acct_ids = Some(acct_ids);
        self
    }

    pub fn with_mfa(mut self, mfa: bool) -> Self {
        self.mfa = Some(mfa);
        self
    }

    pub fn with_jti(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Check if this claims object represents any identity.
    ///
    /// Returns `true` if at least one identity field (user_id or workspace_id) is present.
    pub fn has_identity(&self) -> bool {
        !self.identity.is_empty()
    }

    /// Check if scopes are present.
    pub fn has_scopes(&self) -> bool {
        self.scopes.as_ref().map(|s| !s.is_empty()).unwrap_or(false)
    }

    /// Get scopes as a slice if present, otherwise an empty slice.
    pub fn scopes(&self) -> &[String] {
        self.scopes.as_deref().unwrap_or(&[])
    }

    pub fn roles(&self) -> &[String] {
        self.roles.as_deref().unwrap_or(&[])
    }

    pub fn acct_ids(&self) -> &[String] {
        self.acct_ids.as_deref().unwrap_or(&[])
    }
}
