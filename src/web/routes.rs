//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/indices", get(handlers::indices))
        .route("/api/counts", get(handlers::counts))
        .route(
            "/api/search/:index",
            get(handlers::search_get).post(handlers::search_post),
        )
        .layer(cors)
        .with_state(state)
}
