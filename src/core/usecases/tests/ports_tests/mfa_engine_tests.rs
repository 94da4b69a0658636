use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{CoreError, MfaError};
use crate::core::mfa::{MfaChallenge, MfaMethod, TotpSecret};
use crate::core::usecases::ports::{MfaEnrollment, MfaEngineService};

struct FixedMfaEngine {
    confirmed: Mutex<HashMap<String, bool>>,
    spent_backup_codes: Mutex<HashMap<String, bool>>,
}

#[async_trait]
impl MfaEngineService for FixedMfaEngine {
    async fn begin_enrollment(&self, user_id: &str) -> Result<MfaEnrollment, CoreError> {
        self.confirmed.lock().unwrap().insert(user_id.to_string(), false);
        Ok(MfaEnrollment {
            secret: TotpSecret::enroll(format!("vault:{}", user_id), "t0"),
            provisioning_uri: format!("otpauth://totp/{}", user_id),
            backup_codes: vec!["11111111".to_string(); 10],
        })
    }

    async fn confirm_enrollment(&self, user_id: &str, code: &str) -> Result<(), CoreError> {
        if code == "123456" {
            self.confirmed.lock().unwrap().insert(user_id.to_string(), true);
            Ok(())
        } else {
            Err(CoreError::from(MfaError::InvalidCode))
        }
    }

    async fn issue_challenge(&self, user_id: &str) -> Result<MfaChallenge, CoreError> {
        Ok(MfaChallenge::new("challenge-token", user_id, "t0"))
    }

    async fn consume_challenge(&self, token: &str) -> Result<MfaChallenge, CoreError> {
        Ok(MfaChallenge::new(token, "user-1", "t0"))
    }

    async fn verify(&self, user_id: &str, code: &str) -> Result<MfaMethod, CoreError> {
        if code == "123456" {
            Ok(MfaMethod::Totp)
        } else if code == "backup-1" && !*self.spent_backup_codes.lock().unwrap().get(user_id).unwrap_or(&false) {
            self.spent_backup_codes.lock().unwrap().insert(user_id.to_string(), true);
            Ok(MfaMethod::BackupCode)
        } else {
            Err(CoreError::from(MfaError::InvalidCode))
        }
    }

    async fn disable(&self, user_id: &str) -> Result<(), CoreError> {
        self.confirmed.lock().unwrap().remove(user_id);
        Ok(())
    }
}

fn engine() -> FixedMfaEngine {
    FixedMfaEngine {
        confirmed: Mutex::new(HashMap::new()),
        spent_backup_codes: Mutex::new(HashMap::new()),
    }
}

#[tokio::test]
async fn verify_rejects_invalid_code() {
    let engine = engine();
    assert!(engine.verify("user-1", "wrong").await.is_err());
    assert!(engine.verify("user-1", "123456").await.is_ok());
}

#[tokio::test]
async fn backup_code_cannot_verify_twice() {
    let engine = engine();
    assert_eq!(engine.verify("user-1", "backup-1").await.unwrap(), MfaMethod::BackupCode);
    assert!(engine.verify("user-1", "backup-1").await.is_err());
}
