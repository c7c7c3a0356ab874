//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{events, summary, terms};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The calendar is public read-only data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(summary::GET_SUMMARY, get(handlers::get_summary))
        .route(terms::GET_TERMS, get(handlers::get_terms))
        .route(terms::GET_TERM_DETAIL, get(handlers::get_term_detail))
        .route(events::GET_EVENTS, get(handlers::get_events));

    let api = Router::new()
        .nest("/v1", api_v1)
        .fallback(handlers::api_not_found);

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api);

    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
