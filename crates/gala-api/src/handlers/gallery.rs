//! Gallery listing endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use gala_core::models::Asset;
use serde::Serialize;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Shared caches (CDN/proxy) may hold the listing for the TTL window and
/// revalidate in the background for a day.
const LISTING_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

#[derive(Serialize)]
struct GalleryResponse<'a> {
    assets: &'a [Asset],
}

/// `GET /gallery` - the aggregated, classified asset list.
///
/// Upstream failures are absorbed by the aggregation cache (stale entry or
/// seed dataset); this handler only errors when all fallbacks are exhausted.
pub async fn get_gallery(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let listing = state.gallery.cache.get().await.map_err(|e| {
        tracing::error!(error = %e, "Gallery listing unavailable, no fallback left");
        HttpAppError::from(e)
    })?;

    tracing::debug!(
        assets = listing.assets.len(),
        source = ?listing.source,
        "Serving gallery listing"
    );

    let response: Response = (
        [(header::CACHE_CONTROL, LISTING_CACHE_CONTROL)],
        Json(GalleryResponse {
            assets: &listing.assets,
        }),
    )
        .into_response();
    Ok(response)
}
