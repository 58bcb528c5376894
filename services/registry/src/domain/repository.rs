#![allow(async_fn_in_trait)]

use uuid::Uuid;

use afritrace_domain::role::UserRole;

use crate::domain::types::{
    CertificateRecord, Citizen, Company, CompanyDraft, FeedbackReport, FeedbackReview,
    FeedbackWithReporter, GeoPoint, RemaCompany,
};
use crate::error::RegistryServiceError;

/// Read-only access to export certificates.
pub trait CertificateRepository: Send + Sync {
    /// Exact, case-sensitive batch-code match, joined with the owning company.
    async fn find_by_batch_code(
        &self,
        batch_code: &str,
    ) -> Result<Option<CertificateRecord>, RegistryServiceError>;
}

/// Repository for mining companies.
pub trait CompanyRepository: Send + Sync {
    /// All companies, newest first.
    async fn list(&self) -> Result<Vec<Company>, RegistryServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, RegistryServiceError>;

    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<Company>, RegistryServiceError>;

    async fn create(&self, draft: &CompanyDraft) -> Result<Company, RegistryServiceError>;

    /// Overwrite every writable field. Returns `None` if the company does not exist.
    async fn update(
        &self,
        id: Uuid,
        draft: &CompanyDraft,
    ) -> Result<Option<Company>, RegistryServiceError>;

    /// Returns `true` if a row was updated.
    async fn set_location(&self, id: Uuid, location: GeoPoint)
    -> Result<bool, RegistryServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, RegistryServiceError>;
}

/// Repository for citizen profiles.
pub trait CitizenRepository: Send + Sync {
    /// All profiles, newest first.
    async fn list(&self) -> Result<Vec<Citizen>, RegistryServiceError>;

    async fn exists(&self, id: Uuid) -> Result<bool, RegistryServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, RegistryServiceError>;
}

/// Repository for citizen feedback reports.
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, report: &FeedbackReport) -> Result<(), RegistryServiceError>;

    /// Reports submitted by `user_id`, newest first.
    async fn list_by_user(&self, user_id: Uuid)
    -> Result<Vec<FeedbackReport>, RegistryServiceError>;

    /// Every report with the submitter's profile, newest first.
    async fn list_with_reporter(&self) -> Result<Vec<FeedbackWithReporter>, RegistryServiceError>;

    /// Returns `None` if the report does not exist.
    async fn review(
        &self,
        id: Uuid,
        review: &FeedbackReview,
    ) -> Result<Option<FeedbackReport>, RegistryServiceError>;
}

/// Role assignments of authenticated users.
pub trait RoleRepository: Send + Sync {
    async fn has_role(&self, user_id: Uuid, role: UserRole) -> Result<bool, RegistryServiceError>;
}

/// Source of the national regulator's company list.
///
/// Records come back unvalidated; a bad record must not hide the rest.
pub trait RemaRegistryPort: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<RemaCompany>, RegistryServiceError>;
}
