use chrono::Utc;

use crate::domain::repository::OtpRepository;
use crate::error::AuthServiceError;

pub struct VerifyOtpInput {
    pub email: String,
    pub code: String,
}

/// Confirms control of an e-mail address with the code sent to it.
///
/// Only the most recent unverified code for the address is considered. Older
/// unverified codes are left untouched.
pub struct VerifyOtpUseCase<R: OtpRepository> {
    pub otps: R,
    /// `None` disables attempt counting.
    pub max_attempts: Option<u32>,
}

impl<R: OtpRepository> VerifyOtpUseCase<R> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), AuthServiceError> {
        if input.email.is_empty() || input.code.is_empty() {
            return Err(AuthServiceError::MissingFields);
        }

        let otp = self
            .otps
            .find_latest_unverified(&input.email)
            .await?
            .ok_or(AuthServiceError::CodeNotFound)?;

        if let Some(max) = self.max_attempts {
            if otp.attempts >= max {
                return Err(AuthServiceError::TooManyAttempts);
            }
        }

        if otp.is_expired_at(Utc::now()) {
            return Err(AuthServiceError::CodeExpired);
        }

        if !otp.matches(&input.code) {
            if self.max_attempts.is_some() {
                self.otps.record_failed_attempt(otp.id).await?;
            }
            return Err(AuthServiceError::InvalidCode);
        }

        // Conditional write: a concurrent request that verified the same row
        // first leaves nothing to update.
        if !self.otps.mark_verified(otp.id).await? {
            return Err(AuthServiceError::CodeNotFound);
        }

        tracing::info!(email = %input.email, otp_id = %otp.id, "otp verified");
        Ok(())
    }
}
