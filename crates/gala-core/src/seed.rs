//! Bundled seed gallery.
//!
//! A small static dataset served when the upstream store is unreachable and
//! no cached aggregation exists yet. Keeps the gallery populated on a cold
//! process instead of surfacing an upstream failure to the browser.

use std::sync::OnceLock;

use crate::models::Asset;

const SEED_JSON: &str = include_str!("../data/seed_gallery.json");

static SEED: OnceLock<Vec<Asset>> = OnceLock::new();

/// The bundled fallback assets, parsed once per process.
pub fn seed_assets() -> &'static [Asset] {
    SEED.get_or_init(|| {
        serde_json::from_str(SEED_JSON).expect("bundled seed_gallery.json is valid")
    })
}
