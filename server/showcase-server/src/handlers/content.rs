use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use content_store::{Collection, Record};

use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthContext;
use crate::server::ShowcaseServer;

/// The collections exposed at `/api/:collection`. Contacts are deliberately
/// absent: they have their own routes with different auth rules.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicCollection {
    Events,
    Gallery,
    Services,
    Portfolio,
    Blogs,
}

impl From<PublicCollection> for Collection {
    fn from(collection: PublicCollection) -> Self {
        match collection {
            PublicCollection::Events => Collection::Events,
            PublicCollection::Gallery => Collection::Gallery,
            PublicCollection::Services => Collection::Services,
            PublicCollection::Portfolio => Collection::Portfolio,
            PublicCollection::Blogs => Collection::Blogs,
        }
    }
}

/// Resolve the `/:collection` segment, turning axum's plain-text path
/// rejection into the standard JSON error body for unknown collections.
fn collection_from_path(
    path: Result<Path<PublicCollection>, PathRejection>,
) -> ApiResult<Collection> {
    match path {
        Ok(Path(collection)) => Ok(collection.into()),
        Err(_) => Err(ApiError::validation("Unknown collection")),
    }
}

/// Coerce a create body into a record: must be a JSON object, any fields.
pub(crate) fn body_into_record(body: Value) -> ApiResult<Record> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::validation("Request body must be a JSON object")),
    }
}

/// Fresh opaque id for a created record.
pub(crate) fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// Public listing of a content collection.
pub async fn list(
    State(server): State<ShowcaseServer>,
    collection: Result<Path<PublicCollection>, PathRejection>,
) -> ApiResult<Json<Vec<Record>>> {
    let collection = collection_from_path(collection)?;
    Ok(Json(server.content.read(collection)))
}

/// Admin-only create: assign an id, append, persist the whole list.
pub async fn create(
    _auth: AuthContext,
    State(server): State<ShowcaseServer>,
    collection: Result<Path<PublicCollection>, PathRejection>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let collection = collection_from_path(collection)?;
    let mut item = body_into_record(body)?;
    item.insert("id".to_string(), Value::String(next_id()));

    let mut list = server.content.read(collection);
    list.push(item.clone());
    server
        .content
        .write(collection, &list)
        .map_err(|e| ApiError::storage(format!("Failed to create {collection} item"), e))?;

    Ok((StatusCode::CREATED, Json(item)))
}
