use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::server::ShowcaseServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Seconds since the process started.
    pub uptime: f64,
}

/// Liveness probe.
pub async fn health_check(State(server): State<ShowcaseServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        uptime: server.started_at.elapsed().as_secs_f64(),
    })
}
