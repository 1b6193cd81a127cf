use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Option catalogs
        .route("/options", get(handlers::get_options))
        .route("/options/industries", get(handlers::get_industry_options))
        .route("/options/platforms", get(handlers::get_platform_options))
        // Preferences
        .route(
            "/preferences",
            get(handlers::get_preferences).patch(handlers::update_preferences),
        )
        // Analysis
        .route("/analyze", post(handlers::analyze))
        .route("/analysis", get(handlers::get_latest_analysis))
        .route("/analysis/card", get(handlers::get_latest_card))
        .route("/schema", get(handlers::get_schema))
}
