pub mod certificate;
pub mod citizen;
pub mod company;
pub mod feedback;
pub mod sync;

use afritrace_auth_types::bearer::BearerToken;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use uuid::Uuid;

use crate::error::RegistryServiceError;
use crate::state::AppState;
use crate::usecase::access::RequireAdminUseCase;

/// Resolve the caller as an administrator or fail with 401/403.
pub(crate) async fn require_admin(
    state: &AppState,
    token: &BearerToken,
) -> Result<Uuid, RegistryServiceError> {
    RequireAdminUseCase {
        roles: state.role_repo(),
        jwt_secret: &state.jwt_secret,
    }
    .execute(token)
    .await
}

/// Unwrap a JSON body, reporting rejections as the service's own 400.
pub(crate) fn json_body<T>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, RegistryServiceError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        RegistryServiceError::InvalidRequest
    })
}
