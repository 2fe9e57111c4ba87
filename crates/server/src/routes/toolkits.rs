//! Toolkit catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use atelier_core::ToolkitId;

use crate::db::ToolkitRepository;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::Toolkit;
use crate::state::AppState;

/// Toolkit create request body. `toolkiturl` is the image URL; the field
/// name matches what the deployed frontend sends.
#[derive(Debug, Deserialize)]
pub struct CreateToolkitRequest {
    name: String,
    toolkiturl: String,
}

/// Toolkit update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateToolkitRequest {
    id: i32,
    name: String,
    toolkiturl: String,
}

/// POST /api/add-toolkit
pub async fn create(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreateToolkitRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_owned()));
    }

    let id = ToolkitRepository::new(state.pool())
        .create(&body.name, &body.toolkiturl)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// GET /api/toolits
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Toolkit>>, AppError> {
    let toolkits = ToolkitRepository::new(state.pool()).list().await?;

    Ok(Json(toolkits))
}

/// PUT /api/edit-toolkit
pub async fn update(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<UpdateToolkitRequest>,
) -> Result<Json<Value>, AppError> {
    let changed = ToolkitRepository::new(state.pool())
        .update(ToolkitId::new(body.id), &body.name, &body.toolkiturl)
        .await?;

    Ok(Json(json!({ "success": true, "changedRows": changed })))
}

/// DELETE /api/delete-toolkit/{id}
pub async fn remove(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let affected = ToolkitRepository::new(state.pool())
        .delete(ToolkitId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "affectedRows": affected })))
}
