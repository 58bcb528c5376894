use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
///
/// The display strings are client-facing and returned as the `error` field.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Email and code are required")]
    MissingFields,
    #[error("Invalid request body")]
    InvalidRequest,
    #[error("No verification code found for this email")]
    CodeNotFound,
    #[error("Verification code has expired. Please request a new one.")]
    CodeExpired,
    #[error("Invalid verification code")]
    InvalidCode,
    #[error("Too many failed attempts. Please request a new code.")]
    TooManyAttempts,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::InvalidCode => "INVALID_CODE",
            Self::TooManyAttempts => "TOO_MANY_ATTEMPTS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFields | Self::InvalidRequest | Self::CodeExpired | Self::InvalidCode => {
                StatusCode::BAD_REQUEST
            }
            Self::CodeNotFound => StatusCode::NOT_FOUND,
            Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are already visible through the trace layer; only internal errors
        // carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
