//! Envelope-encrypted secret storage, implementing the `Vault` and
//! `KeyManagementService` ports.

pub mod kms;
pub mod vault_store;

pub use kms::LocalKms;
pub use vault_store::EnvelopeVault;
