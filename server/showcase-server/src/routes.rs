use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{auth, contacts, content, health, not_found};
use crate::server::ShowcaseServer;

/// Create health check routes
pub fn health_routes() -> Router<ShowcaseServer> {
    Router::new().route("/health", get(health::health_check))
}

/// Create authentication routes
pub fn auth_routes() -> Router<ShowcaseServer> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/verify", get(auth::verify))
}

/// Create contact submission and management routes. Submission is public;
/// listing and the admin mutations are token-gated.
pub fn contact_routes() -> Router<ShowcaseServer> {
    Router::new()
        .route("/contacts", get(contacts::list).post(contacts::create))
        .route("/contacts/:id/status", patch(contacts::update_status))
        .route("/contacts/:id/notes", patch(contacts::update_notes))
        .route("/contacts/:id", delete(contacts::remove))
}

/// Create routes for the five public content collections: anyone can list,
/// only authenticated admins can create. Registered after the static
/// `/contacts` routes so the parameterized segment never shadows them.
pub fn content_routes() -> Router<ShowcaseServer> {
    Router::new().route("/:collection", get(content::list).post(content::create))
}

/// Create all application routes: the `/api` surface plus the SPA static
/// fallback (any non-API path serves the built frontend, with `index.html`
/// as the entry for client-routed paths).
pub fn create_routes(server: &ShowcaseServer) -> Router<ShowcaseServer> {
    let api = Router::new()
        .merge(health_routes())
        .nest("/auth", auth_routes())
        .merge(contact_routes())
        .merge(content_routes())
        // Unknown API paths get a JSON 404, never the SPA entry document.
        .fallback(not_found);

    let router = Router::new().nest("/api", api);

    let index = server.config.dist_dir.join("index.html");
    if index.is_file() {
        router.fallback_service(
            ServeDir::new(&server.config.dist_dir).not_found_service(ServeFile::new(index)),
        )
    } else {
        router.fallback(not_found)
    }
}
