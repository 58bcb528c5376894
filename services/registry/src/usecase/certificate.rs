use afritrace_domain::compliance::VerificationOutcome;

use crate::domain::repository::CertificateRepository;
use crate::domain::types::CertificateRecord;
use crate::error::RegistryServiceError;

pub const EMPTY_CODE_MESSAGE: &str = "Please enter a batch or certificate code";

#[derive(Debug, Clone)]
pub struct CertificateVerification {
    pub outcome: VerificationOutcome,
    pub record: CertificateRecord,
}

/// Public certificate lookup.
///
/// The code must be non-blank after trimming but is matched exactly as given,
/// so `" RWA-1"` and `"RWA-1"` are different codes.
pub struct VerifyCertificateUseCase<R: CertificateRepository> {
    pub repo: R,
}

impl<R: CertificateRepository> VerifyCertificateUseCase<R> {
    pub async fn execute(
        &self,
        code: &str,
    ) -> Result<CertificateVerification, RegistryServiceError> {
        if code.trim().is_empty() {
            return Err(RegistryServiceError::validation(EMPTY_CODE_MESSAGE));
        }

        let record = self
            .repo
            .find_by_batch_code(code)
            .await
            .map_err(|e| match e {
                RegistryServiceError::Internal(cause) => RegistryServiceError::LookupFailed(cause),
                other => other,
            })?
            .ok_or(RegistryServiceError::CertificateNotFound)?;

        Ok(CertificateVerification {
            outcome: record.certificate.compliance.outcome(),
            record,
        })
    }
}
