//! `Authorization: Bearer <token>` extractor.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;

/// Raw bearer token from the `Authorization` header.
///
/// Extraction only checks the header shape; handlers validate the token with
/// [`crate::token::validate_access_token`] and the service's secret.
///
/// - Required (`BearerToken`): 401 if the header is absent or malformed.
/// - Optional (`Option<BearerToken>`): `None` if absent, 401 if malformed.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse(parts: &Parts) -> Result<Option<BearerToken>, StatusCode> {
    parts
        .headers
        .typed_try_get::<Authorization<Bearer>>()
        .map(|header| header.map(|Authorization(bearer)| BearerToken(bearer.token().to_owned())))
        .map_err(|_| StatusCode::UNAUTHORIZED)
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Header parsing happens synchronously so the returned future does not
    // borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parse(parts).and_then(|t| t.ok_or(StatusCode::UNAUTHORIZED));
        async move { token }
    }
}

impl<S> OptionalFromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let token = parse(parts);
        async move { token }
    }
}
