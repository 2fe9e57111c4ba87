//! Portfolio catalog domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use atelier_core::PortfolioId;

/// A portfolio entry: a shipped project with links and screenshots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: PortfolioId,
    pub name: String,
    pub live_url: String,
    pub technologies: String,
    pub categories: String,
    pub thumbnail_url: String,
    pub full_page_url: String,
    pub created_at: DateTime<Utc>,
}
