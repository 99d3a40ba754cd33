use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes.
///
/// Single-image reads and annotation updates are POST routes; existing
/// clients depend on that.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/project", get(handlers::project))
        .route("/health", get(handlers::health_check))

        .route("/stats", post(handlers::fetch_stats))

        // Images
        .route("/images", post(handlers::fetch_images))
        .route("/images/{image_id}", post(handlers::fetch_image_metadata))
        .route("/images/{image_id}/rating", post(handlers::set_rating))
        .route("/images/{image_id}/tags", post(handlers::set_tags))
        .route("/images/{image_id}/notes", post(handlers::set_notes))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy allowing the configured frontend origin
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
