use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use afritrace_core::tracing::init_tracing;
use afritrace_registry::config::RegistryConfig;
use afritrace_registry::infra::rema::RemaRegistry;
use afritrace_registry::router::build_router;
use afritrace_registry::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = RegistryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let rema = RemaRegistry::from_url(config.rema_api_url);
    if matches!(rema, RemaRegistry::Static) {
        info!("REMA_API_URL not set; company sync uses the built-in registry list");
    }

    let state = AppState {
        db: Arc::new(db),
        jwt_secret: config.jwt_secret,
        rema,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.registry_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("registry service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
