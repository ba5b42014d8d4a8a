/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes, nested under `/api`
 * 3. Fallback handler (JSON 404)
 */

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::conversion::route_not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and configuration shared by handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Fallback
///
/// Unknown routes answer 404 with `{"message": "Not Found"}`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(app_state.config.cors_origin.as_deref());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", configure_api_routes(Router::new()))
        .fallback(|| async { route_not_found() })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS for the browser client: the configured origin, or any origin
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", e);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
