//! Asset proxy endpoint.
//!
//! Fetches one asset's bytes and metadata from the upstream store and
//! re-serves them, so upstream identity and credentials never reach the
//! browser. The whole asset is buffered before responding; galleries here
//! are bounded (tens to low hundreds of photos), so this stays acceptable,
//! but large-file use would want incremental streaming instead.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use gala_core::AppError;
use serde::Deserialize;

use crate::error::HttpAppError;
use crate::state::AppState;

/// A published asset's content never changes for a given id, so browsers and
/// edges may cache it for a year and skip revalidation.
const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Deserialize)]
pub struct AssetQuery {
    #[serde(default)]
    id: Option<String>,
}

/// `GET /gallery/asset?id=` - proxy one asset from the upstream store.
///
/// Content and metadata are separate upstream calls (the transfer API does
/// not return the stored content type inline); they run concurrently. Any
/// upstream failure surfaces as a generic server error.
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AssetQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = query
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: id".to_string()))?;

    let store = &state.gallery.store;
    let (bytes, metadata) = tokio::try_join!(store.download(id), store.metadata(id)).map_err(
        |e| {
            tracing::error!(error = %e, asset_id = %id, "Failed to proxy asset from upstream");
            HttpAppError::from(e)
        },
    )?;

    let content_type = metadata
        .mime_type
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

    tracing::debug!(
        asset_id = %id,
        content_type = %content_type,
        bytes = bytes.len(),
        "Proxying asset"
    );

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, ASSET_CACHE_CONTROL)
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build asset response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
