use axum::{Json, extract::State};
use serde::Serialize;

use afritrace_auth_types::bearer::BearerToken;

use crate::error::RegistryServiceError;
use crate::handlers::require_admin;
use crate::state::AppState;
use crate::usecase::sync::{SYNC_COMPLETED_MESSAGE, SyncCompaniesUseCase};

#[derive(Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: &'static str,
    pub synced: u32,
    pub skipped: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// ── POST /admin/companies/sync ───────────────────────────────────────────────

pub async fn sync_companies(
    token: BearerToken,
    State(state): State<AppState>,
) -> Result<Json<SyncResponse>, RegistryServiceError> {
    let admin_id = require_admin(&state, &token).await?;
    tracing::info!(admin_id = %admin_id, "company sync requested");
    let usecase = SyncCompaniesUseCase {
        companies: state.company_repo(),
        source: state.rema.clone(),
    };
    let report = usecase.execute().await?;
    Ok(Json(SyncResponse {
        success: true,
        message: SYNC_COMPLETED_MESSAGE,
        synced: report.synced,
        skipped: report.skipped,
        errors: report.errors,
    }))
}
