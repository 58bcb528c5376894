use afritrace_domain::certification::CertificationStatus;

use crate::domain::repository::{CompanyRepository, RemaRegistryPort};
use crate::domain::types::{CompanyDraft, RemaCompany, SyncReport};
use crate::error::RegistryServiceError;
use crate::usecase::company::{mine_location, validate_company};

pub const SYNC_COMPLETED_MESSAGE: &str = "REMA company sync completed";

/// Pulls the REMA company list and upserts each entry by registration number.
///
/// A failing source aborts the run. A failing record is reported in
/// [`SyncReport::errors`] and the run moves on to the next one.
pub struct SyncCompaniesUseCase<C: CompanyRepository, S: RemaRegistryPort> {
    pub companies: C,
    pub source: S,
}

impl<C: CompanyRepository, S: RemaRegistryPort> SyncCompaniesUseCase<C, S> {
    pub async fn execute(&self) -> Result<SyncReport, RegistryServiceError> {
        let records = self.source.fetch_companies().await?;
        tracing::info!(count = records.len(), "starting REMA company sync");

        let mut report = SyncReport::default();
        for record in records {
            if record.registration_number.trim().is_empty() {
                tracing::warn!(name = %record.name, "REMA record without registration number");
                report.skipped += 1;
                continue;
            }
            let name = record.name.clone();
            match self.upsert(record).await {
                Ok(()) => report.synced += 1,
                Err(message) => {
                    tracing::warn!(name = %name, error = %message, "REMA record failed");
                    report.errors.push(message);
                }
            }
        }

        tracing::info!(
            synced = report.synced,
            skipped = report.skipped,
            errors = report.errors.len(),
            "REMA company sync completed"
        );
        Ok(report)
    }

    async fn upsert(&self, record: RemaCompany) -> Result<(), String> {
        let name = record.name.clone();
        let draft = draft_from_rema(record)
            .and_then(validate_company)
            .map_err(|e| format!("Invalid record {name}: {}", describe(&e)))?;

        let existing = self
            .companies
            .find_by_registration_number(&draft.registration_number)
            .await
            .map_err(|e| format!("Error processing {name}: {}", describe(&e)))?;

        match existing {
            Some(company) => {
                self.companies
                    .update(company.id, &draft)
                    .await
                    .map_err(|e| format!("Failed to update {name}: {}", describe(&e)))?
                    .ok_or_else(|| format!("Failed to update {name}: company not found"))?;
            }
            None => {
                self.companies
                    .create(&draft)
                    .await
                    .map_err(|e| format!("Failed to insert {name}: {}", describe(&e)))?;
            }
        }
        Ok(())
    }
}

fn draft_from_rema(record: RemaCompany) -> Result<CompanyDraft, RegistryServiceError> {
    let certification_status = record
        .certification_status
        .parse::<CertificationStatus>()
        .map_err(|e| RegistryServiceError::validation(e.to_string()))?;
    Ok(CompanyDraft {
        mine_location: mine_location(record.mine_location_lat, record.mine_location_lng)?,
        name: record.name,
        registration_number: record.registration_number,
        contact_email: record.contact_email,
        contact_phone: record.contact_phone,
        address: record.address,
        certification_status,
        certification_start_date: record.certification_start_date,
        certification_end_date: record.certification_end_date,
        regional_compliance: record.regional_compliance,
        is_active: true,
    })
}

/// Operator-facing description, including the cause chain of internal errors.
fn describe(error: &RegistryServiceError) -> String {
    match error {
        RegistryServiceError::Internal(cause) => format!("{cause:#}"),
        other => other.to_string(),
    }
}
