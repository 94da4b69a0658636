//! Tests for ports (traits).

pub mod identity_repository_tests;
pub mod credential_repository_tests;
pub mod session_store_tests;
pub mod password_hasher_tests;
pub mod token_issuer_tests;
pub mod key_ring_tests;
pub mod vault_tests;
pub mod policy_engine_tests;
pub mod audit_log_tests;
pub mod event_bus_tests;
pub mod mfa_engine_tests;
pub mod clock_tests;
pub mod trading_account_repository_tests;
pub mod oauth_client_tests;
