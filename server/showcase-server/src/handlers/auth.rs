use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use auth_gate::{Claims, IssuedToken};

use crate::error::ApiResult;
use crate::middleware::AuthContext;
use crate::server::ShowcaseServer;

/// Login request. Fields default to empty so a partial body falls through
/// to the credential check (and its 401) instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Admin login: delegates to the token service, which audits every attempt.
pub async fn login(
    State(server): State<ShowcaseServer>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<IssuedToken>> {
    let issued = server.tokens.issue_token(&request.email, &request.password)?;
    Ok(Json(issued))
}

/// Lightweight token introspection: the admin dashboard's route guard calls
/// this before granting access, instead of trusting mere token presence.
/// Reaching the handler at all means the extractor verified the token.
pub async fn verify(auth: AuthContext) -> Json<Claims> {
    Json(auth.claims)
}
