//! HTTP trigger surface

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::processor_impl::LicenseProcessor;
use crate::traits::MetafieldStore;

/// Build the Axum router with all routes
pub fn build_router<S>(processor: Arc<LicenseProcessor<S>>) -> Router
where
    S: MetafieldStore + Send + Sync + 'static,
{
    Router::new()
        // Invocation endpoint
        .route(
            "/process-license",
            post(handlers::process::process_license::<S>),
        )
        // Health check
        .route("/health", get(handlers::status::health_check))
        .layer(CorsLayer::permissive())
        .with_state(processor)
}
