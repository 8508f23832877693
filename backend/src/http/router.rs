//! Router configuration for the HTTP API.
//!
//! Sets up all routes, middleware (CORS, compression, tracing) and the
//! not-found fallback.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Browser clients are served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/news", get(handlers::get_news))
        .route("/ports", get(handlers::list_ports))
        .route("/cargo-types", get(handlers::list_cargo_types))
        .route("/predict", post(handlers::predict_delay))
        .route("/port-intelligence", post(handlers::port_intelligence))
        .route(
            "/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route("/reviews/{id}", delete(handlers::delete_review));

    Router::new()
        .route("/", get(handlers::banner))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
