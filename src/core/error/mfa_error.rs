/// Errors from multi-factor enrollment and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MfaError {
    /// TOTP code (and, if allowed, every backup code) failed to verify.
    InvalidCode,
    /// The MFA challenge token was not found or its TTL has elapsed.
    ChallengeExpired,
    /// Enrollment was attempted while a confirmed secret already exists.
    AlreadyEnrolled,
    /// An MFA operation was attempted for a user with no confirmed secret.
    NotEnrolled,
}

impl MfaError {
    pub fn is_invalid_code(&self) -> bool {
        matches!(self, Self::InvalidCode)
    }
}

impl std::fmt::Display for MfaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCode => write!(f, "MFA code is invalid"),
            Self::ChallengeExpired => write!(f, "MFA challenge has expired"),
            Self::AlreadyEnrolled => write!(f, "MFA is already enrolled"),
            Self::NotEnrolled => write!(f, "MFA is not enrolled"),
        }
    }
}
