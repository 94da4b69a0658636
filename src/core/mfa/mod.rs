//! Multi-factor authentication vocabulary: TOTP enrollment state, backup
//! codes, and the short-lived challenge issued between password and MFA
//! verification. The TOTP algorithm itself (HMAC-SHA1, 30 s step) and the
//! secret material live in `crate::adapters::crypto::mfa`; this module is
//! the domain shape those adapters operate on.

pub mod totp_secret;
pub mod backup_code;
pub mod challenge;

pub use totp_secret::{MfaMethod, TotpSecret};
pub use backup_code::{BackupCode, BACKUP_CODE_COUNT, BACKUP_CODE_DIGITS};
pub use challenge::MfaChallenge;
