//! Toolkit catalog domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use atelier_core::ToolkitId;

/// A toolkit entry: a named tool with an image/link URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolkit {
    pub id: ToolkitId,
    pub name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
