use sea_orm::Database;
use tracing::info;

use plantdesk_access::config::AccessConfig;
use plantdesk_access::router::build_router;
use plantdesk_access::state::AppState;
use plantdesk_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AccessConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.access_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("access service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
