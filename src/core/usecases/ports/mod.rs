//! Port definitions for the core usecases module.
//!
//! These traits define the contracts for all external dependencies required by the use cases layer.
//! No infrastructure or implementation details are present here.
//!
//! Adapters must implement these traits to provide concrete behavior.

pub mod identity_repository;
pub mod credential_repository;
pub mod session_store;
pub mod password_hasher;
pub mod token_issuer;
pub mod key_ring;
pub mod vault;
pub mod policy_engine;
pub mod audit_log;
pub mod event_bus;
pub mod mfa_engine;
pub mod clock;
pub mod service_registry;
pub mod trading_account_repository;
pub mod oauth_client;

pub use identity_repository::IdentityRepository;
pub use credential_repository::CredentialRepository;
pub use session_store::SessionStore;
pub use password_hasher::PasswordHasher;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use key_ring::KeyRing;
pub use vault::{KeyManagementService, Vault};
pub use policy_engine::PolicyEngine;
pub use audit_log::AuditLog;
pub use event_bus::EventBus;
pub use mfa_engine::{MfaEnrollment, MfaEngineService};
pub use clock::Clock;
pub use service_registry::ServiceRegistry;
pub use trading_account_repository::TradingAccountRepository;
pub use oauth_client::{OAuthClient, OAuthStart, VerifiedOAuthIdentity};
