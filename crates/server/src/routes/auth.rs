//! Registration and login handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::services::{AuthService, Registration};
use crate::state::AppState;

/// Registration request body.
///
/// Fields default to empty so that absent and blank fields fail the same
/// way, as a 400 naming the field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    admin_email: String,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    profile_picture: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    admin_password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    admin_email: String,
    #[serde(default)]
    admin_password: String,
}

/// POST /api/admin-register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = AuthService::new(state.pool(), state.tokens());

    let registration = Registration {
        name: body.name,
        email: body.admin_email,
        mobile: body.mobile,
        profile_picture: body.profile_picture,
        address: body.address,
        password: body.admin_password,
    };

    let id = service.register(&registration).await?;

    tracing::info!(admin_id = %id, "Registered admin account");

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AuthService::new(state.pool(), state.tokens());

    let outcome = service
        .login(&body.admin_email, &body.admin_password)
        .await?;

    tracing::info!(admin_id = %outcome.admin.id, "Admin logged in");

    Ok(Json(json!({
        "token": outcome.token,
        "user": outcome.admin,
    })))
}
