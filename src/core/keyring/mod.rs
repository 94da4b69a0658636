//! Signing-key lifecycle and JWKS vocabulary.
//!
//! No key material, no cryptography — this module only models which keys
//! exist, their status, and how they're represented for public verification.
//! `crate::adapters::crypto::keyring` holds the actual RSA/EC key pairs and
//! implements rotation against this vocabulary.

pub mod signing_key;
pub mod jwks;

pub use signing_key::{KeyAlgorithm, KeyStatus, SigningKeyMeta};
pub use jwks::{JwkDescriptor, JwksSnapshot};
