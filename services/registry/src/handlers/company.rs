use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afritrace_auth_types::bearer::BearerToken;
use afritrace_domain::certification::CertificationStatus;
use afritrace_domain::compliance::RegionalCompliance;

use crate::domain::types::{Company, CompanyDraft, GeoPoint};
use crate::error::RegistryServiceError;
use crate::handlers::{json_body, require_admin};
use crate::state::AppState;
use crate::usecase::company::{
    CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, ListCompaniesUseCase,
    SetCompanyLocationUseCase, UpdateCompanyUseCase, mine_location,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CompanyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mine_location_lat: Option<f64>,
    #[serde(default)]
    pub mine_location_lng: Option<f64>,
    #[serde(default)]
    pub certification_status: CertificationStatus,
    #[serde(default)]
    pub certification_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub certification_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub regional_compliance: RegionalCompliance,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

/// Forms submit empty inputs as `""`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl CompanyRequest {
    fn into_draft(self) -> Result<CompanyDraft, RegistryServiceError> {
        let mine_location = mine_location(self.mine_location_lat, self.mine_location_lng)?;
        Ok(CompanyDraft {
            name: self.name,
            registration_number: self.registration_number,
            contact_email: non_blank(self.contact_email),
            contact_phone: non_blank(self.contact_phone),
            address: non_blank(self.address),
            mine_location,
            certification_status: self.certification_status,
            certification_start_date: self.certification_start_date,
            certification_end_date: self.certification_end_date,
            regional_compliance: self.regional_compliance,
            is_active: self.is_active,
        })
    }
}

#[derive(Deserialize)]
pub struct LocationRequest {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub mine_location_lat: Option<f64>,
    pub mine_location_lng: Option<f64>,
    pub certification_status: CertificationStatus,
    pub certification_start_date: Option<NaiveDate>,
    pub certification_end_date: Option<NaiveDate>,
    pub regional_compliance: RegionalCompliance,
    pub is_active: bool,
    #[serde(serialize_with = "afritrace_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "afritrace_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            registration_number: c.registration_number,
            contact_email: c.contact_email,
            contact_phone: c.contact_phone,
            address: c.address,
            mine_location_lat: c.mine_location.map(|p| p.lat),
            mine_location_lng: c.mine_location.map(|p| p.lng),
            certification_status: c.certification_status,
            certification_start_date: c.certification_start_date,
            certification_end_date: c.certification_end_date,
            regional_compliance: c.regional_compliance,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ── GET /admin/companies ─────────────────────────────────────────────────────

pub async fn list_companies(
    token: BearerToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = ListCompaniesUseCase {
        repo: state.company_repo(),
    };
    let companies = usecase.execute().await?;
    Ok(Json(companies.into_iter().map(Into::into).collect()))
}

// ── GET /admin/companies/{id} ────────────────────────────────────────────────

pub async fn get_company(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse>, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = GetCompanyUseCase {
        repo: state.company_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /admin/companies ────────────────────────────────────────────────────

pub async fn create_company(
    token: BearerToken,
    State(state): State<AppState>,
    body: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), RegistryServiceError> {
    require_admin(&state, &token).await?;
    let draft = json_body(body)?.into_draft()?;
    let usecase = CreateCompanyUseCase {
        repo: state.company_repo(),
    };
    let company = usecase.execute(draft).await?;
    Ok((StatusCode::CREATED, Json(company.into())))
}

// ── PUT /admin/companies/{id} ────────────────────────────────────────────────

pub async fn update_company(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let draft = json_body(body)?.into_draft()?;
    let usecase = UpdateCompanyUseCase {
        repo: state.company_repo(),
    };
    Ok(Json(usecase.execute(id, draft).await?.into()))
}

// ── PATCH /admin/companies/{id}/location ─────────────────────────────────────

pub async fn set_company_location(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<StatusCode, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let LocationRequest { lat, lng } = json_body(body)?;
    let usecase = SetCompanyLocationUseCase {
        repo: state.company_repo(),
    };
    usecase.execute(id, GeoPoint { lat, lng }).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /admin/companies/{id} ─────────────────────────────────────────────

pub async fn delete_company(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = DeleteCompanyUseCase {
        repo: state.company_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
