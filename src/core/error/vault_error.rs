/// Errors from envelope-encrypted secret storage and retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// No secret exists under the given reference.
    NotFound { vault_ref: String },
    /// The stored envelope failed to decrypt (wrong key, corrupted ciphertext,
    /// tampered AAD). Callers MUST treat this as unavailable, not absent.
    DecryptFailed { vault_ref: String },
    /// The KMS master-key operation (wrap or unwrap) failed or timed out.
    KmsUnavailable { reason: String },
}

impl VaultError {
    pub fn not_found(vault_ref: impl Into<String>) -> Self {
        Self::NotFound {
            vault_ref: vault_ref.into(),
        }
    }

    pub fn decrypt_failed(vault_ref: impl Into<String>) -> Self {
        Self::DecryptFailed {
            vault_ref: vault_ref.into(),
        }
    }

    pub fn kms_unavailable(reason: impl Into<String>) -> Self {
        Self::KmsUnavailable {
            reason: reason.into(),
        }
    }

    pub fn is_decrypt_failed(&self) -> bool {
        matches!(self, Self::DecryptFailed { .. })
    }
}

impl std::fmt::Display for VaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { vault_ref } => write!(f, "No secret at vault ref: {}", vault_ref),
            Self::DecryptFailed { vault_ref } => {
                write!(f, "Failed to decrypt vault ref: {}", vault_ref)
            }
            Self::KmsUnavailable { reason } => write!(f, "KMS unavailable: {}", reason),
        }
    }
}
