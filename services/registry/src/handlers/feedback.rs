use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use afritrace_auth_types::bearer::BearerToken;
use afritrace_domain::feedback::{FeedbackCategory, FeedbackStatus};

use crate::domain::types::{FeedbackReport, FeedbackReview, FeedbackWithReporter};
use crate::error::RegistryServiceError;
use crate::handlers::{json_body, require_admin};
use crate::state::AppState;
use crate::usecase::access::authenticate;
use crate::usecase::feedback::{
    ListAllFeedbackUseCase, ListMyFeedbackUseCase, ReviewFeedbackUseCase, SubmitFeedbackInput,
    SubmitFeedbackUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Missing fields arrive as empty strings so validation can name them.
#[derive(Deserialize)]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct SubmitFeedbackResponse {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct ReviewFeedbackRequest {
    #[serde(default)]
    pub status: Option<FeedbackStatus>,
    #[serde(default)]
    pub admin_response: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub location: String,
    pub category: FeedbackCategory,
    pub message: String,
    pub status: FeedbackStatus,
    pub admin_response: Option<String>,
    pub admin_id: Option<Uuid>,
    #[serde(serialize_with = "afritrace_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "afritrace_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<FeedbackReport> for FeedbackResponse {
    fn from(r: FeedbackReport) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            email: r.email,
            location: r.location,
            category: r.category,
            message: r.message,
            status: r.status,
            admin_response: r.admin_response,
            admin_id: r.admin_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ReporterResponse {
    pub full_name: Option<String>,
    pub email: String,
}

#[derive(Serialize)]
pub struct AdminFeedbackResponse {
    #[serde(flatten)]
    pub report: FeedbackResponse,
    pub reporter: Option<ReporterResponse>,
}

impl From<FeedbackWithReporter> for AdminFeedbackResponse {
    fn from(f: FeedbackWithReporter) -> Self {
        Self {
            report: f.report.into(),
            reporter: f.reporter.map(|r| ReporterResponse {
                full_name: r.full_name,
                email: r.email,
            }),
        }
    }
}

// ── POST /feedback ───────────────────────────────────────────────────────────

pub async fn submit_feedback(
    token: Option<BearerToken>,
    State(state): State<AppState>,
    body: Result<Json<SubmitFeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitFeedbackResponse>), RegistryServiceError> {
    let user_id = token
        .map(|t| authenticate(&t, &state.jwt_secret))
        .transpose()?
        .map(|info| info.user_id);
    let body = json_body(body)?;
    let usecase = SubmitFeedbackUseCase {
        repo: state.feedback_repo(),
        citizens: state.citizen_repo(),
    };
    let id = usecase
        .execute(SubmitFeedbackInput {
            user_id,
            name: body.name,
            email: body.email,
            location: body.location,
            category: body.category,
            message: body.message,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(SubmitFeedbackResponse { id })))
}

// ── GET /feedback/@me ────────────────────────────────────────────────────────

pub async fn list_my_feedback(
    token: BearerToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackResponse>>, RegistryServiceError> {
    let info = authenticate(&token, &state.jwt_secret)?;
    let usecase = ListMyFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    let reports = usecase.execute(info.user_id).await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

// ── GET /admin/feedback ──────────────────────────────────────────────────────

pub async fn list_all_feedback(
    token: BearerToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminFeedbackResponse>>, RegistryServiceError> {
    require_admin(&state, &token).await?;
    let usecase = ListAllFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    let reports = usecase.execute().await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

// ── PATCH /admin/feedback/{id} ───────────────────────────────────────────────

pub async fn review_feedback(
    token: BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<ReviewFeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, RegistryServiceError> {
    let admin_id = require_admin(&state, &token).await?;
    let body = json_body(body)?;
    let usecase = ReviewFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    let report = usecase
        .execute(
            id,
            FeedbackReview {
                status: body.status,
                admin_response: body.admin_response,
                admin_id,
            },
        )
        .await?;
    Ok(Json(report.into()))
}
