use crate::core::keyring::signing_key::{KeyAlgorithm, KeyStatus, SigningKeyMeta};

/// A single public-key descriptor as published in JWKS.
///
/// `public_params` holds the algorithm-specific public material (RSA
/// modulus/exponent or EC curve point) already encoded the way the adapter's
/// JSON serialization expects; the core treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwkDescriptor {
    pub kid: String,
    pub kty: &'static str,
    pub use_: &'static str,
    pub algorithm: &'static str,
    pub status: &'static str,
    pub public_params: String,
}

impl JwkDescriptor {
    pub fn from_meta(meta: &SigningKeyMeta, public_params: impl Into<String>) -> Self {
        let kty = match meta.algorithm {
            KeyAlgorithm::Rsa2048Sha256 => "RSA",
            KeyAlgorithm::EcP256Sha256 => "EC",
        };
        let status = match meta.status {
            KeyStatus::Active => "active",
            KeyStatus::Retiring => "retiring",
            KeyStatus::Retired => "retired",
        };
        Self {
            kid: meta.kid.clone(),
            kty,
            use_: "sig",
            algorithm: meta.algorithm.jose_alg(),
            status,
            public_params: public_params.into(),
        }
    }
}

/// A JWKS snapshot: every descriptor a peer verifier should currently trust.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JwksSnapshot {
    pub keys: Vec<JwkDescriptor>,
}

impl JwksSnapshot {
    pub fn new(keys: Vec<JwkDescriptor>) -> Self {
        Self { keys }
    }

    pub fn find(&self, kid: &str) -> Option<&JwkDescriptor> {
        self.keys.iter().find(|k| k.kid == kid)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
