/// A TOTP enrollment: the base32 secret itself lives in CredentialVault,
/// not here — this type carries only the metadata needed to reason about
/// enrollment state without ever holding the secret in the clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotpSecret {
    pub vault_ref: String,
    pub issued_at: String,
    pub confirmed: bool,
}

impl TotpSecret {
    pub fn enroll(vault_ref: impl Into<String>, issued_at: impl Into<String>) -> Self {
        Self {
            vault_ref: vault_ref.into(),
            issued_at: issued_at.into(),
            confirmed: false,
        }
    }

    pub fn confirm(&self) -> Self {
        Self {
            confirmed: true,
            ..self.clone()
        }
    }
}

/// The result of a verification attempt against either the TOTP code or a
/// backup code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfaMethod {
    Totp,
    BackupCode,
}
