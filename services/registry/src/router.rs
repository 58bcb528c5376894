use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use afritrace_core::health::{healthz, readyz};
use afritrace_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer,
};

use crate::handlers::{
    certificate::verify_certificate,
    citizen::{delete_citizen, list_citizens},
    company::{
        create_company, delete_company, get_company, list_companies, set_company_location,
        update_company,
    },
    feedback::{list_all_feedback, list_my_feedback, review_feedback, submit_feedback},
    sync::sync_companies,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Certificates
        .route("/certificates/verify", post(verify_certificate))
        // Feedback
        .route("/feedback", post(submit_feedback))
        .route("/feedback/@me", get(list_my_feedback))
        // Admin: companies
        .route("/admin/companies", get(list_companies).post(create_company))
        .route("/admin/companies/sync", post(sync_companies))
        .route(
            "/admin/companies/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/admin/companies/{id}/location", patch(set_company_location))
        // Admin: citizens
        .route("/admin/citizens", get(list_citizens))
        .route("/admin/citizens/{id}", delete(delete_citizen))
        // Admin: feedback
        .route("/admin/feedback", get(list_all_feedback))
        .route("/admin/feedback/{id}", patch(review_feedback))
        .with_state(state)
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .layer(cors_layer())
}
