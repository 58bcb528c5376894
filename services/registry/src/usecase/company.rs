use uuid::Uuid;

use crate::domain::repository::CompanyRepository;
use crate::domain::types::{Company, CompanyDraft, GeoPoint};
use crate::error::RegistryServiceError;

/// Trim the key fields and check the invariants every stored company holds.
pub fn validate_company(mut draft: CompanyDraft) -> Result<CompanyDraft, RegistryServiceError> {
    draft.name = draft.name.trim().to_owned();
    draft.registration_number = draft.registration_number.trim().to_owned();

    if draft.name.is_empty() {
        return Err(RegistryServiceError::validation("Company name is required"));
    }
    if draft.registration_number.is_empty() {
        return Err(RegistryServiceError::validation(
            "Registration number is required",
        ));
    }
    if let (Some(start), Some(end)) = (
        draft.certification_start_date,
        draft.certification_end_date,
    ) {
        if start > end {
            return Err(RegistryServiceError::validation(
                "Certification start date must not be after the end date",
            ));
        }
    }
    if let Some(location) = draft.mine_location {
        validate_location(location)?;
    }
    Ok(draft)
}

/// A mine location needs both coordinates or neither.
pub fn mine_location(
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Option<GeoPoint>, RegistryServiceError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Some(GeoPoint { lat, lng })),
        (None, None) => Ok(None),
        _ => Err(RegistryServiceError::validation(
            "Latitude and longitude must be set together",
        )),
    }
}

pub fn validate_location(location: GeoPoint) -> Result<(), RegistryServiceError> {
    if !(-90.0..=90.0).contains(&location.lat) {
        return Err(RegistryServiceError::validation(
            "Latitude must be between -90 and 90",
        ));
    }
    if !(-180.0..=180.0).contains(&location.lng) {
        return Err(RegistryServiceError::validation(
            "Longitude must be between -180 and 180",
        ));
    }
    Ok(())
}

// ── ListCompanies ────────────────────────────────────────────────────────────

pub struct ListCompaniesUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> ListCompaniesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Company>, RegistryServiceError> {
        self.repo.list().await
    }
}

// ── GetCompany ───────────────────────────────────────────────────────────────

pub struct GetCompanyUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> GetCompanyUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Company, RegistryServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryServiceError::CompanyNotFound)
    }
}

// ── CreateCompany ────────────────────────────────────────────────────────────

pub struct CreateCompanyUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> CreateCompanyUseCase<R> {
    pub async fn execute(&self, draft: CompanyDraft) -> Result<Company, RegistryServiceError> {
        let draft = validate_company(draft)?;
        if self
            .repo
            .find_by_registration_number(&draft.registration_number)
            .await?
            .is_some()
        {
            return Err(RegistryServiceError::CompanyAlreadyExists);
        }
        let company = self.repo.create(&draft).await?;
        tracing::info!(
            company_id = %company.id,
            registration_number = %company.registration_number,
            "company created"
        );
        Ok(company)
    }
}

// ── UpdateCompany ────────────────────────────────────────────────────────────

pub struct UpdateCompanyUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> UpdateCompanyUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        draft: CompanyDraft,
    ) -> Result<Company, RegistryServiceError> {
        let draft = validate_company(draft)?;
        if let Some(other) = self
            .repo
            .find_by_registration_number(&draft.registration_number)
            .await?
        {
            if other.id != id {
                return Err(RegistryServiceError::CompanyAlreadyExists);
            }
        }
        self.repo
            .update(id, &draft)
            .await?
            .ok_or(RegistryServiceError::CompanyNotFound)
    }
}

// ── SetCompanyLocation ───────────────────────────────────────────────────────

pub struct SetCompanyLocationUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> SetCompanyLocationUseCase<R> {
    pub async fn execute(&self, id: Uuid, location: GeoPoint) -> Result<(), RegistryServiceError> {
        validate_location(location)?;
        if !self.repo.set_location(id, location).await? {
            return Err(RegistryServiceError::CompanyNotFound);
        }
        Ok(())
    }
}

// ── DeleteCompany ────────────────────────────────────────────────────────────

pub struct DeleteCompanyUseCase<R: CompanyRepository> {
    pub repo: R,
}

impl<R: CompanyRepository> DeleteCompanyUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), RegistryServiceError> {
        if !self.repo.delete(id).await? {
            return Err(RegistryServiceError::CompanyNotFound);
        }
        tracing::info!(company_id = %id, "company deleted");
        Ok(())
    }
}
