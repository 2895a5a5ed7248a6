use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use content_store::{Collection, Record};

use crate::error::{ApiError, ApiResult};
use crate::handlers::content::{body_into_record, next_id};
use crate::middleware::AuthContext;
use crate::server::ShowcaseServer;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotesRequest {
    #[serde(rename = "adminNotes")]
    pub admin_notes: String,
}

/// Admin listing of contact submissions.
pub async fn list(
    _auth: AuthContext,
    State(server): State<ShowcaseServer>,
) -> Json<Vec<Record>> {
    Json(server.content.read(Collection::Contacts))
}

/// Public contact submission: arbitrary fields, plus a generated id and
/// creation timestamp.
pub async fn create(
    State(server): State<ShowcaseServer>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let mut item = body_into_record(body)?;
    item.insert("id".to_string(), Value::String(next_id()));
    item.insert(
        "createdAt".to_string(),
        Value::String(server.clock.now().to_rfc3339()),
    );

    let mut contacts = server.content.read(Collection::Contacts);
    contacts.push(item.clone());
    server
        .content
        .write(Collection::Contacts, &contacts)
        .map_err(|e| ApiError::storage("Failed to create contact", e))?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Set a submission's review status.
pub async fn update_status(
    _auth: AuthContext,
    State(server): State<ShowcaseServer>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Record>> {
    update_field(&server, &id, "status", Value::String(request.status)).map(Json)
}

/// Set a submission's admin notes.
pub async fn update_notes(
    _auth: AuthContext,
    State(server): State<ShowcaseServer>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNotesRequest>,
) -> ApiResult<Json<Record>> {
    update_field(&server, &id, "adminNotes", Value::String(request.admin_notes)).map(Json)
}

/// Delete a submission, returning the removed record.
pub async fn remove(
    _auth: AuthContext,
    State(server): State<ShowcaseServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    let mut contacts = server.content.read(Collection::Contacts);
    let index = find_by_id(&contacts, &id).ok_or_else(|| ApiError::not_found("Contact"))?;
    let removed = contacts.remove(index);
    server
        .content
        .write(Collection::Contacts, &contacts)
        .map_err(|e| ApiError::storage("Failed to delete contact", e))?;
    Ok(Json(removed))
}

/// Linear scan for a record with the given id.
fn find_by_id(records: &[Record], id: &str) -> Option<usize> {
    records
        .iter()
        .position(|r| r.get("id").and_then(Value::as_str) == Some(id))
}

fn update_field(
    server: &ShowcaseServer,
    id: &str,
    field: &str,
    value: Value,
) -> ApiResult<Record> {
    let mut contacts = server.content.read(Collection::Contacts);
    let index = find_by_id(&contacts, id).ok_or_else(|| ApiError::not_found("Contact"))?;
    contacts[index].insert(field.to_string(), value);
    let updated = contacts[index].clone();
    server
        .content
        .write(Collection::Contacts, &contacts)
        .map_err(|e| ApiError::storage("Failed to update contact", e))?;
    Ok(updated)
}
