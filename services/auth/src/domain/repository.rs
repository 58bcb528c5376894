#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::OtpCode;
use crate::error::AuthServiceError;

/// Repository for one-time passcodes.
pub trait OtpRepository: Send + Sync {
    /// Most recently created unverified code for `email`, expired or not.
    async fn find_latest_unverified(
        &self,
        email: &str,
    ) -> Result<Option<OtpCode>, AuthServiceError>;

    /// Set `verified = true` only if the row is still unverified.
    /// Returns `false` when no row changed (already consumed).
    async fn mark_verified(&self, id: Uuid) -> Result<bool, AuthServiceError>;

    /// Increment the failed-attempt counter of a row.
    async fn record_failed_attempt(&self, id: Uuid) -> Result<(), AuthServiceError>;
}
