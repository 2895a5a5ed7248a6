pub mod auth;
pub mod contacts;
pub mod content;
pub mod health;

use axum::http::StatusCode;
use axum::response::Json;

use crate::error::ApiErrorResponse;

/// JSON fallback when no built frontend is available to serve.
pub async fn not_found() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: "not_found".to_string(),
            message: "Not found".to_string(),
        }),
    )
}
