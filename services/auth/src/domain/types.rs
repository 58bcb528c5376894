use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One-time passcode row, as read for verification.
#[derive(Debug, Clone)]
pub struct OtpCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    /// Failed verification attempts recorded against this row.
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    /// A code is still usable at its exact expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Plain string equality, no normalization.
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }
}

/// Message returned to the client after a successful verification.
pub const OTP_VERIFIED_MESSAGE: &str = "Email verified successfully! You can now log in.";
