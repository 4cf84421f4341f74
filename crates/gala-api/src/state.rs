//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what
//! they need via Axum's `FromRef`.

use std::sync::Arc;

use gala_core::Config;
use gala_store::{GalleryCache, RemoteStore};

use crate::services::registration::RegistrationBackend;

/// Gallery aggregation and asset proxy dependencies.
#[derive(Clone)]
pub struct GalleryState {
    pub cache: Arc<GalleryCache>,
    pub store: Arc<dyn RemoteStore>,
}

/// Registration upsert against the external store. `None` when the
/// registration backend is not configured; the access endpoint then fails
/// with a configuration error instead of degrading silently.
#[derive(Clone)]
pub struct AccessState {
    pub registration: Option<Arc<dyn RegistrationBackend>>,
}

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryState,
    pub access: AccessState,
    pub config: Config,
}

impl axum::extract::FromRef<Arc<AppState>> for GalleryState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.gallery.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for AccessState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.access.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
