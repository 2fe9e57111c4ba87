//! Admin account handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use atelier_core::AdminId;

use crate::db::{AdminRepository, RepositoryError};
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::AdminProfile;
use crate::state::AppState;

/// Profile update request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    profile_picture: String,
    #[serde(default)]
    address: String,
}

/// GET /api/registerd-admins
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AdminProfile>>, AppError> {
    let admins = AdminRepository::new(state.pool()).list_all().await?;

    Ok(Json(admins.into_iter().map(Into::into).collect()))
}

/// PUT /api/admin-profile/{id}
pub async fn update_profile(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let id = AdminId::new(id);

    let admin = AdminRepository::new(state.pool())
        .update_profile(
            id,
            &body.name,
            &body.mobile,
            &body.profile_picture,
            &body.address,
        )
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("admin {id}")),
            other => AppError::Database(other),
        })?;

    Ok(Json(json!({
        "success": true,
        "user": AdminProfile::from(admin),
    })))
}

/// DELETE /api/delete-admin/{id}
pub async fn remove(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let affected = AdminRepository::new(state.pool())
        .delete(AdminId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "affectedRows": affected })))
}
