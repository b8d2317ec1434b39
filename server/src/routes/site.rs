//! Site metadata endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use client::config::{SiteConfig, SiteMetadata};

/// `GET /api/site` — the metadata the document head is rendered with.
pub async fn metadata(State(site): State<Arc<SiteConfig>>) -> Json<SiteMetadata> {
    Json(site.metadata.clone())
}
