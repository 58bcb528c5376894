//! Mock auth helpers for integration tests.
//!
//! Services validate HS256 tokens issued by the hosted auth provider. In tests,
//! `MockAuth` signs equivalent tokens with [`TEST_JWT_SECRET`] so no provider
//! is needed.

use std::time::{SystemTime, UNIX_EPOCH};

use afritrace_auth_types::token::{JwtClaims, issue_access_token};
use http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use uuid::Uuid;

/// Secret shared between token minting and the service under test.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Identity to present as a bearer token.
pub struct MockAuth {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    fn token_with_exp(&self, exp: u64) -> String {
        let claims = JwtClaims {
            sub: self.user_id.to_string(),
            email: self.email.clone(),
            exp,
        };
        issue_access_token(&claims, TEST_JWT_SECRET).unwrap()
    }

    /// A token valid for one hour.
    pub fn token(&self) -> String {
        self.token_with_exp(now_secs() + 3600)
    }

    /// A token that expired well outside the validation leeway.
    pub fn expired_token(&self) -> String {
        self.token_with_exp(now_secs() - 3600)
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        bearer_header(&self.token())
    }
}

pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
