use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use afritrace_domain::certification::CertificationStatus;
use afritrace_domain::compliance::{RegionalCompliance, VerificationOutcome};

use crate::error::RegistryServiceError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::certificate::{CertificateVerification, VerifyCertificateUseCase};

// ── POST /certificates/verify ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCertificateRequest {
    #[serde(default)]
    pub code: String,
}

#[derive(Serialize)]
pub struct CertificateCompanyResponse {
    pub name: String,
    pub registration_number: String,
    pub certification_status: CertificationStatus,
    pub regional_compliance: RegionalCompliance,
}

#[derive(Serialize)]
pub struct VerifyCertificateResponse {
    pub outcome: VerificationOutcome,
    pub fully_verified: bool,
    pub batch_code: String,
    pub mineral_type: String,
    pub origin_district: String,
    pub mine_site: String,
    pub export_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    pub certification_status: CertificationStatus,
    pub verified_by_rema: bool,
    pub icglr_compliant: bool,
    pub tamper_hash: Option<String>,
    pub company: Option<CertificateCompanyResponse>,
}

impl From<CertificateVerification> for VerifyCertificateResponse {
    fn from(v: CertificateVerification) -> Self {
        let cert = v.record.certificate;
        Self {
            outcome: v.outcome,
            fully_verified: cert.compliance.fully_verified(),
            batch_code: cert.batch_code,
            mineral_type: cert.mineral_type,
            origin_district: cert.origin_district,
            mine_site: cert.mine_site,
            export_date: cert.export_date,
            weight_kg: cert.weight_kg,
            certification_status: cert.status,
            verified_by_rema: cert.compliance.verified_by_rema,
            icglr_compliant: cert.compliance.icglr_compliant,
            tamper_hash: cert.tamper_hash,
            company: v.record.company.map(|c| CertificateCompanyResponse {
                name: c.name,
                registration_number: c.registration_number,
                certification_status: c.certification_status,
                regional_compliance: c.regional_compliance,
            }),
        }
    }
}

pub async fn verify_certificate(
    State(state): State<AppState>,
    body: Result<Json<VerifyCertificateRequest>, JsonRejection>,
) -> Result<Json<VerifyCertificateResponse>, RegistryServiceError> {
    let body = json_body(body)?;
    let usecase = VerifyCertificateUseCase {
        repo: state.certificate_repo(),
    };
    let verification = usecase.execute(&body.code).await?;
    Ok(Json(verification.into()))
}
