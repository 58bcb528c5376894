use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Registry service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RegistryServiceError {
    /// A submitted field failed validation; the message names the rule.
    #[error("{0}")]
    Validation(String),
    #[error("invalid request body")]
    InvalidRequest,
    #[error("authentication required")]
    Unauthorized,
    #[error("Administrator access required")]
    Forbidden,
    #[error("certificate not found")]
    CertificateNotFound,
    #[error("company not found")]
    CompanyNotFound,
    #[error("citizen not found")]
    CitizenNotFound,
    #[error("feedback report not found")]
    FeedbackNotFound,
    #[error("company with this registration number already exists")]
    CompanyAlreadyExists,
    #[error("error verifying certificate")]
    LookupFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RegistryServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::CertificateNotFound => "CERTIFICATE_NOT_FOUND",
            Self::CompanyNotFound => "COMPANY_NOT_FOUND",
            Self::CitizenNotFound => "CITIZEN_NOT_FOUND",
            Self::FeedbackNotFound => "FEEDBACK_NOT_FOUND",
            Self::CompanyAlreadyExists => "COMPANY_ALREADY_EXISTS",
            Self::LookupFailed(_) | Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RegistryServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::CertificateNotFound
            | Self::CompanyNotFound
            | Self::CitizenNotFound
            | Self::FeedbackNotFound => StatusCode::NOT_FOUND,
            Self::CompanyAlreadyExists => StatusCode::CONFLICT,
            Self::LookupFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::LookupFailed(ref e) | Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
