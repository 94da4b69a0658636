//! TOTP (RFC 6238, HMAC-SHA1, 6 digits, 30 s step, one-step tolerance)
//! enrollment and verification, backed by `Vault` for secret material and
//! by `totp-rs` for the HOTP/TOTP algorithm itself.
//!
//! The per-user enrollment record (which vault ref holds the secret, which
//! backup codes exist and whether they're spent) lives in process memory
//! here; a multi-instance deployment would move `records` into the same
//! store backing `SessionStore`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use totp_rs::{Algorithm, Secret, TOTP};

use crate::core::error::{CoreError, MfaError};
use crate::core::mfa::{
    BackupCode, MfaChallenge, MfaMethod, TotpSecret, BACKUP_CODE_COUNT, BACKUP_CODE_DIGITS,
};
use crate::core::usecases::ports::{Clock, MfaEnrollment, MfaEngineService, Vault};

const TOTP_DIGITS: usize = 6;
const TOTP_STEP_SECS: u64 = 30;
const TOTP_SKEW_STEPS: u8 = 1;
const CHALLENGE_TTL_SECS: i64 = 10 * 60;

struct MfaRecord {
    secret: TotpSecret,
    backup_codes: Vec<BackupCode>,
}

pub struct TotpMfaEngine {
    vault: Arc<dyn Vault>,
    clock: Arc<dyn Clock>,
    issuer: String,
    records: DashMap<String, MfaRecord>,
    challenges: DashMap<String, MfaChallenge>,
}

impl TotpMfaEngine {
    pub fn new(vault: Arc<dyn Vault>, clock: Arc<dyn Clock>, issuer: impl Into<String>) -> Self {
        Self {
            vault,
            clock,
            issuer: issuer.into(),
            records: DashMap::new(),
            challenges: DashMap::new(),
        }
    }

    fn unix_now(&self) -> u64 {
        self.clock.now().timestamp().max(0) as u64
    }

    fn totp_for(secret_bytes: Vec<u8>, issuer: String, account: String) -> Result<TOTP, CoreError> {
        TOTP::new(
            Algorithm::SHA1,
            TOTP_DIGITS,
            TOTP_SKEW_STEPS,
            TOTP_STEP_SECS,
            secret_bytes,
            Some(issuer),
            account,
        )
        .map_err(|e| CoreError::from(crate::core::error::InvariantError::violated(format!("invalid totp parameters: {}", e))))
    }

    fn generate_backup_code() -> String {
        let mut rng = rand::rng();
        (0..BACKUP_CODE_DIGITS)
            .map(|_| rng.random_range(0..10).to_string())
            .collect()
    }
}

#[async_trait]
impl MfaEngineService for TotpMfaEngine {
    async fn begin_enrollment(&self, user_id: &str) -> Result<MfaEnrollment, CoreError> {
        if let Some(record) = self.records.get(user_id) {
            if record.secret.confirmed {
                return Err(CoreError::from(MfaError::AlreadyEnrolled));
            }
        }

        let secret = Secret::generate_secret();
        let secret_bytes = secret.to_bytes().map_err(|e| {
            CoreError::from(crate::core::error::InvariantError::violated(format!(
                "failed to encode totp secret: {:?}",
                e
            )))
        })?;
        let issued_at = self.clock.now().to_rfc3339();
        let vault_ref = self
            .vault
            .store(user_id, "totp_secret", &secret_bytes)
            .await?;

        let totp = Self::totp_for(secret_bytes, self.issuer.clone(), user_id.to_string())?;
        let provisioning_uri = totp.get_url();

        let mut backup_codes = Vec::with_capacity(BACKUP_CODE_COUNT);
        let mut plain_codes = Vec::with_capacity(BACKUP_CODE_COUNT);
        for _ in 0..BACKUP_CODE_COUNT {
            let plain = Self::generate_backup_code();
            let code_ref = self
                .vault
                .store(user_id, "totp_backup_code", plain.as_bytes())
                .await?;
            backup_codes.push(BackupCode::unused(code_ref.id().to_string()));
            plain_codes.push(plain);
        }

        let totp_secret = TotpSecret::enroll(vault_ref.id().to_string(), issued_at);
        self.records.insert(
            user_id.to_string(),
            MfaRecord {
                secret: totp_secret.clone(),
                backup_codes,
            },
        );

        Ok(MfaEnrollment {
            secret: totp_secret,
            provisioning_uri,
            backup_codes: plain_codes,
        })
    }

    async fn confirm_enrollment(&self, user_id: &str, code: &str) -> Result<(), CoreError> {
        let vault_ref = {
            let record = self
                .records
                .get(user_id)
                .ok_or_else(|| CoreError::from(MfaError::NotEnrolled))?;
            if record.secret.confirmed {
                return Err(CoreError::from(MfaError::AlreadyEnrolled));
            }
            crate::core::vault::VaultRef::new(record.secret.vault_ref.clone())
        };
        let secret_bytes = self.vault.fetch(&vault_ref).await?;
        let totp = Self::totp_for(secret_bytes, self.issuer.clone(), user_id.to_string())?;

        if !totp.check(code, self.unix_now()) {
            return Err(CoreError::from(MfaError::InvalidCode));
        }

        let mut record = self
            .records
            .get_mut(user_id)
            .ok_or_else(|| CoreError::from(MfaError::NotEnrolled))?;
        record.secret = record.secret.confirm();
        Ok(())
    }

    async fn issue_challenge(&self, user_id: &str) -> Result<MfaChallenge, CoreError> {
        let token = uuid::Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext)).to_string();
        let challenge = MfaChallenge::new(token.clone(), user_id.to_string(), self.clock.now().to_rfc3339());
        self.challenges.insert(token, challenge.clone());
        Ok(challenge)
    }

    async fn consume_challenge(&self, token: &str) -> Result<MfaChallenge, CoreError> {
        let (_, challenge) = self
            .challenges
            .remove(token)
            .ok_or(CoreError::from(MfaError::ChallengeExpired))?;

        let issued_at = chrono::DateTime::parse_from_rfc3339(&challenge.issued_at)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(|e| CoreError::from(crate::core::error::InvariantError::inconsistent_state(format!("invalid challenge timestamp: {e}"))))?;
        if self.clock.now() - issued_at > chrono::Duration::seconds(CHALLENGE_TTL_SECS) {
            return Err(CoreError::from(MfaError::ChallengeExpired));
        }

        Ok(challenge)
    }

    async fn verify(&self, user_id: &str, code: &str) -> Result<MfaMethod, CoreError> {
        let record = self
            .records
            .get(user_id)
            .ok_or_else(|| CoreError::from(MfaError::NotEnrolled))?;
        if !record.secret.confirmed {
            return Err(CoreError::from(MfaError::NotEnrolled));
        }

        let secret_bytes = self
            .vault
            .fetch(&crate::core::vault::VaultRef::new(record.secret.vault_ref.clone()))
            .await?;
        let totp = Self::totp_for(secret_bytes, self.issuer.clone(), user_id.to_string())?;
        if totp.check(code, self.unix_now()) {
            return Ok(MfaMethod::Totp);
        }

        for (index, backup) in record.backup_codes.iter().enumerate() {
            if backup.used {
                continue;
            }
            let stored = self
                .vault
                .fetch(&crate::core::vault::VaultRef::new(backup.vault_ref.clone()))
                .await?;
            if stored == code.as_bytes() {
                drop(record);
                let mut record = self
                    .records
                    .get_mut(user_id)
                    .ok_or_else(|| CoreError::from(MfaError::NotEnrolled))?;
                record.backup_codes[index] = record.backup_codes[index].spend();
                return Ok(MfaMethod::BackupCode);
            }
        }

        Err(CoreError::from(MfaError::InvalidCode))
    }

    async fn disable(&self, user_id: &str) -> Result<(), CoreError> {
        self.records.remove(user_id);
        Ok(())
    }
}
