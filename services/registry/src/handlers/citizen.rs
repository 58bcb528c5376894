use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use afritrace_auth_types::bearer::BearerToken;

use crate::error::RegistryServiceError;
use crate::handlers::require_admin;
use crate::state::AppState;
use crate::usecase::citizen::{DeleteCitizenUseCase, ListCitizensUseCase};

#[derive(Serialize)]
pub struct CitizenResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    #[serde(serialize_with = "afritrace_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ── GET /admin/citizens ──────────────────────────────────────────────────────

pub async fn list_citizens(
    token: BearerToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<CitizenResponse>>, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = ListCitizensUseCase {
        repo: state.citizen_repo(),
    };
    let citizens = usecase.execute().await?;
    let items = citizens
        .into_iter()
        .map(|c| CitizenResponse {
            id: c.id,
            email: c.email,
            full_name: c.full_name,
            created_at: c.created_at,
        })
        .collect();
    Ok(Json(items))
}

// ── DELETE /admin/citizens/{id} ──────────────────────────────────────────────

pub async fn delete_citizen(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = DeleteCitizenUseCase {
        repo: state.citizen_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
