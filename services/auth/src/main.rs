use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use afritrace_auth::config::AuthConfig;
use afritrace_auth::router::build_router;
use afritrace_auth::state::AppState;
use afritrace_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db: Arc::new(db),
        otp_max_attempts: config.otp_max_attempts,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
