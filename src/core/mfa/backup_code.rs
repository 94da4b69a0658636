/// One of the ten one-shot backup codes issued at enrollment.
///
/// Each code is stored as an independent CredentialVault reference so a
/// single compromised code can be invalidated without touching the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupCode {
    pub vault_ref: String,
    pub used: bool,
}

impl BackupCode {
    pub fn unused(vault_ref: impl Into<String>) -> Self {
        Self {
            vault_ref: vault_ref.into(),
            used: false,
        }
    }

    /// Mark this code spent. Backup codes are one-shot; a used code must
    /// never verify again regardless of whether it's evicted from storage.
    pub fn spend(&self) -> Self {
        Self {
            used: true,
            ..self.clone()
        }
    }
}

/// Digits in one generated backup code, per the enrollment contract.
pub const BACKUP_CODE_DIGITS: usize = 8;

/// Number of backup codes issued per enrollment.
pub const BACKUP_CODE_COUNT: usize = 10;
