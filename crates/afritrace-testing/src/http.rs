//! Response body helpers.

use axum::body::{Body, to_bytes};
use axum::response::Response;
use serde_json::Value;

/// Read a response body as JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
