use axum::{
    Router,
    routing::{get, post},
};

use afritrace_core::health::{healthz, readyz};
use afritrace_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer,
};

use crate::handlers::otp::{preflight, verify_otp};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP
        .route("/auth/otp/verify", post(verify_otp).options(preflight))
        .with_state(state)
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .layer(cors_layer())
}
