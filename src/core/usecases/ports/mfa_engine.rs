//! Port for TOTP/backup-code enrollment and verification.

use async_trait::async_trait;

use crate::core::error::CoreError;
use crate::core::mfa::{MfaChallenge, MfaMethod, TotpSecret};

/// Everything returned to the caller when enrollment begins: the
/// provisioning URI (for QR rendering, done by the transport layer, not
/// here), and the ten backup codes in the clear — the only time they are
/// ever shown unencrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MfaEnrollment {
    pub secret: TotpSecret,
    pub provisioning_uri: String,
    pub backup_codes: Vec<String>,
}

/// Contract for the MFA engine.
#[async_trait]
pub trait MfaEngineService: Send + Sync {
	/// Begin enrollment: generate a TOTP secret and ten backup codes,
	/// store them unconfirmed in the vault.
	async fn begin_enrollment(&self, user_id: &str) -> Result<MfaEnrollment, CoreError>;

	/// Confirm enrollment by checking a live TOTP code against the
	/// unconfirmed secret; marks it confirmed on success.
	async fn confirm_enrollment(&self, user_id: &str, code: &str) -> Result<(), CoreError>;

	/// Issue a short-lived MFA challenge after password verification.
	async fn issue_challenge(&self, user_id: &str) -> Result<MfaChallenge, CoreError>;

	/// Resolve and consume a challenge token issued by `issue_challenge`,
	/// recovering the `user_id` it was issued for. One-shot: a token that
	/// has already been resolved (or never existed, or is past its
	/// 10-minute TTL) fails with `MfaError::ChallengeExpired`.
	async fn consume_challenge(&self, token: &str) -> Result<MfaChallenge, CoreError>;

	/// Verify a code (TOTP or backup) against the user's enrolled secret.
	/// A spent backup code never verifies twice.
	async fn verify(&self, user_id: &str, code: &str) -> Result<MfaMethod, CoreError>;

	/// Remove MFA enrollment entirely (admin or self-service disable).
	async fn disable(&self, user_id: &str) -> Result<(), CoreError>;
}
