use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use plantdesk_core::health::{healthz, readyz};
use plantdesk_core::middleware::request_id_layer;

use crate::handlers::{role::update_user_role, roster::list_user_roles};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Roles
        .route("/access/roles", post(update_user_role))
        .route("/access/users", get(list_user_roles))
        // The admin UI calls from a different origin; the CORS layer answers
        // preflights and stamps permissive headers on every response.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
