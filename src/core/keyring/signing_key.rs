/// Lifecycle status of a signing key within the ring.
///
/// Exactly one key is `Active` at a time; `Retiring` keys still publish
/// their public half so in-flight tokens keep validating through the
/// rotation grace window; `Retired` keys have left JWKS entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Active,
    Retiring,
    Retired,
}

impl KeyStatus {
    pub fn publishes_public_key(&self) -> bool {
        matches!(self, Self::Active | Self::Retiring)
    }
}

/// The signing algorithm a key uses, restricted to the asymmetric schemes
/// the token subsystem accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Rsa2048Sha256,
    EcP256Sha256,
}

impl KeyAlgorithm {
    /// The `alg` value stamped into a JWT header / JWKS descriptor.
    pub fn jose_alg(&self) -> &'static str {
        match self {
            Self::Rsa2048Sha256 => "RS256",
            Self::EcP256Sha256 => "ES256",
        }
    }
}

/// Metadata for one key in the ring, excluding key material itself.
///
/// Private/public key bytes live in the adapter (`crate::adapters::crypto::keyring`);
/// the domain only needs to reason about identity, algorithm, status, and
/// the temporal window during which the key is trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKeyMeta {
    pub kid: String,
    pub algorithm: KeyAlgorithm,
    pub status: KeyStatus,
    pub not_before: String,
    /// `None` while Active; set to the grace deadline once demoted to Retiring.
    pub not_after: Option<String>,
}

impl SigningKeyMeta {
    pub fn new_active(kid: impl Into<String>, algorithm: KeyAlgorithm, not_before: impl Into<String>) -> Self {
        Self {
            kid: kid.into(),
            algorithm,
            status: KeyStatus::Active,
            not_before: not_before.into(),
            not_after: None,
        }
    }

    /// Demote this key to Retiring with a grace deadline.
    pub fn retiring(&self, grace_deadline: impl Into<String>) -> Self {
        Self {
            status: KeyStatus::Retiring,
            not_after: Some(grace_deadline.into()),
            ..self.clone()
        }
    }

    pub fn retired(&self) -> Self {
        Self {
            status: KeyStatus::Retired,
            ..self.clone()
        }
    }

    /// Whether this key's descriptor belongs in a JWKS snapshot right now.
    pub fn belongs_in_jwks(&self) -> bool {
        self.status.publishes_public_key()
    }
}
