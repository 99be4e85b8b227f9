//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Link listing
//! - `POST /add`           - Create link
//! - `GET  /delete/{id}`   - Delete link
//! - `GET|POST /edit/{id}` - Edit form / update link
//! - `GET  /create-table`  - Ensure the link table exists
//! - `GET  /health`        - Database health check
//! - anything else         - Static assets from the configured directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory whose files are served for unmatched paths
///   (e.g. `/style.css`)
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}

/// Routes and middleware without path normalization.
///
/// Integration tests drive this router directly since the normalizing wrapper
/// is a plain `Service` rather than a `Router`.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
