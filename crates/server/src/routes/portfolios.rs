//! Portfolio catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use atelier_core::PortfolioId;

use crate::db::PortfolioRepository;
use crate::db::portfolios::PortfolioFields;
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::models::Portfolio;
use crate::state::AppState;

/// Portfolio create request body. `catagories` is misspelled on the wire;
/// the deployed frontend sends it that way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    name: String,
    live_url: String,
    technologies: String,
    #[serde(rename = "catagories")]
    categories: String,
    thumbnail_url: String,
    full_page_url: String,
}

/// Portfolio update request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioRequest {
    id: i32,
    name: String,
    live_url: String,
    technologies: String,
    #[serde(rename = "catagories")]
    categories: String,
    thumbnail_url: String,
    full_page_url: String,
}

/// POST /api/add-portfolio
pub async fn create(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_owned()));
    }

    let id = PortfolioRepository::new(state.pool())
        .create(&PortfolioFields {
            name: &body.name,
            live_url: &body.live_url,
            technologies: &body.technologies,
            categories: &body.categories,
            thumbnail_url: &body.thumbnail_url,
            full_page_url: &body.full_page_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// GET /api/portfolios
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Portfolio>>, AppError> {
    let portfolios = PortfolioRepository::new(state.pool()).list().await?;

    Ok(Json(portfolios))
}

/// PUT /api/update-portfolio
pub async fn update(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<UpdatePortfolioRequest>,
) -> Result<Json<Value>, AppError> {
    let changed = PortfolioRepository::new(state.pool())
        .update(
            PortfolioId::new(body.id),
            &PortfolioFields {
                name: &body.name,
                live_url: &body.live_url,
                technologies: &body.technologies,
                categories: &body.categories,
                thumbnail_url: &body.thumbnail_url,
                full_page_url: &body.full_page_url,
            },
        )
        .await?;

    Ok(Json(json!({ "success": true, "changedRows": changed })))
}

/// DELETE /api/portfolios/{id}
pub async fn remove(
    RequireAuth(_claims): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let affected = PortfolioRepository::new(state.pool())
        .delete(PortfolioId::new(id))
        .await?;

    Ok(Json(json!({ "success": true, "affectedRows": affected })))
}
