//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs, so the
//! integration tests can build the same router over fake backends.

pub mod routes;
pub mod server;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gala_core::Config;
use gala_store::{DriveStore, GalleryCache, RemoteStore, SystemClock, WalkLimits};

use crate::services::registration::{RegistrationBackend, RegistrationService};
use crate::state::{AccessState, AppState, GalleryState};

/// Initialize the entire application against the real upstream store.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    validation::validate_config(&config).context("Configuration validation failed")?;

    let store: Arc<dyn RemoteStore> = Arc::new(
        DriveStore::new(
            &config.drive_api_base,
            &config.drive_api_key,
            Duration::from_secs(config.upstream_connect_timeout_secs),
            Duration::from_secs(config.upstream_timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("Failed to build upstream client: {e}"))?,
    );

    let registration = RegistrationService::from_config(&config)
        .map(|service| Arc::new(service) as Arc<dyn RegistrationBackend>);
    if registration.is_none() {
        tracing::warn!(
            "Registration backend not configured, POST /gallery/access will report a server error"
        );
    }

    let state = build_state(&config, store, registration);
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Assemble AppState from its backends. Shared with the integration tests,
/// which pass fakes instead of the Drive client.
pub fn build_state(
    config: &Config,
    store: Arc<dyn RemoteStore>,
    registration: Option<Arc<dyn RegistrationBackend>>,
) -> Arc<AppState> {
    let cache = Arc::new(GalleryCache::new(
        store.clone(),
        config.gallery_root_folder_id.clone(),
        Duration::from_secs(config.gallery_cache_ttl_secs),
        WalkLimits {
            max_depth: config.max_tree_depth,
            max_folders: config.max_folders_visited,
        },
        config.seed_enabled,
        Arc::new(SystemClock),
    ));

    Arc::new(AppState {
        gallery: GalleryState { cache, store },
        access: AccessState { registration },
        config: config.clone(),
    })
}
