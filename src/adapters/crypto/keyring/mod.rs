//! RSA key-ring adapter implementing the `KeyRing` port.

pub mod rsa_key_ring;

pub use rsa_key_ring::RsaKeyRing;
