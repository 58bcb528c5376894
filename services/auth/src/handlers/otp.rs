use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::OTP_VERIFIED_MESSAGE;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{VerifyOtpInput, VerifyOtpUseCase};

// ── POST /auth/otp/verify ────────────────────────────────────────────────────

/// Both fields are optional on the wire so that a missing or `null` field
/// reports "required" instead of a generic body rejection.
#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    body: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<Json<VerifyOtpResponse>, AuthServiceError> {
    let Json(body) = body.map_err(|_| AuthServiceError::InvalidRequest)?;
    let usecase = VerifyOtpUseCase {
        otps: state.otp_repo(),
        max_attempts: state.otp_max_attempts,
    };
    usecase
        .execute(VerifyOtpInput {
            email: body.email.unwrap_or_default(),
            code: body.code.unwrap_or_default(),
        })
        .await?;
    Ok(Json(VerifyOtpResponse {
        success: true,
        message: OTP_VERIFIED_MESSAGE,
    }))
}

// ── OPTIONS /auth/otp/verify ─────────────────────────────────────────────────

/// Plain `OPTIONS` without preflight headers; real preflights are answered by
/// the CORS layer before reaching here.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
