//! TOTP/backup-code implementation of the `MfaEngineService` port.

pub mod totp_engine;

pub use totp_engine::TotpMfaEngine;
