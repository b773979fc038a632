//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/layout", get(handlers::get_layout))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/charts/success-pie", get(handlers::get_success_pie))
        .route("/charts/payload-scatter", get(handlers::get_payload_scatter));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchDataset, LaunchRecord, Outcome};
    use crate::services::Dashboard;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let dataset = LaunchDataset::from_records(vec![LaunchRecord {
            launch_site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            outcome: Outcome::Success,
            booster_version_category: "v1.0".to_string(),
        }])
        .unwrap();
        let state = AppState::new(Arc::new(Dashboard::new(Arc::new(dataset))));
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
