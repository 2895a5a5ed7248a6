//! Showcase Server - marketing-site content API
//!
//! This library provides the HTTP surface of the site backend: public
//! content listing, public contact submission, admin login, and the
//! token-gated content management endpoints, plus single-page-application
//! static fallback.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use server::{ServerConfig, ShowcaseServer};

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this are rejected (the original allowed 10mb JSON).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_app(server: ShowcaseServer) -> Router {
    routes::create_routes(&server)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(CompressionLayer::new())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
