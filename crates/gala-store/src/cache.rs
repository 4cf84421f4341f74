//! Aggregation cache: time-bounded, process-wide, crash-only.
//!
//! Exactly one entry exists per cache; it is replaced wholesale on refresh,
//! never merged. Upstream failures are absorbed here: a stale entry or the
//! bundled seed dataset keeps the listing served, and only a cold cache with
//! a failing upstream and the seed disabled surfaces an error.
//!
//! Refreshes run behind a single-flight guard so concurrent cache misses
//! share one tree walk instead of each re-walking the upstream tree.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gala_core::models::Asset;
use gala_core::seed::seed_assets;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, WalkLimits};
use crate::traits::{RemoteStore, StoreError, StoreResult};

/// Time source, injectable so tests drive TTL expiry without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Where a served listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// Refreshed from upstream during this call.
    Fresh,
    /// Served from a cache entry younger than the TTL.
    Cached,
    /// Upstream failed; an expired entry was served instead.
    Stale,
    /// Upstream failed with nothing cached; the bundled seed was served.
    Seed,
}

/// A served gallery listing.
#[derive(Debug, Clone)]
pub struct GalleryListing {
    pub assets: Arc<Vec<Asset>>,
    pub source: ListingSource,
}

struct CacheEntry {
    assets: Arc<Vec<Asset>>,
    fetched_at: Instant,
}

/// TTL-bounded cache fronting the tree aggregator.
pub struct GalleryCache {
    store: Arc<dyn RemoteStore>,
    root_ref: String,
    ttl: Duration,
    limits: WalkLimits,
    seed_enabled: bool,
    clock: Arc<dyn Clock>,
    entry: RwLock<Option<CacheEntry>>,
    // Single-flight guard: at most one in-flight refresh per cache.
    refresh: Mutex<()>,
}

impl GalleryCache {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        root_ref: impl Into<String>,
        ttl: Duration,
        limits: WalkLimits,
        seed_enabled: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        GalleryCache {
            store,
            root_ref: root_ref.into(),
            ttl,
            limits,
            seed_enabled,
            clock,
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Serve the aggregation, refreshing from upstream when the entry is
    /// missing or older than the TTL.
    pub async fn get(&self) -> StoreResult<GalleryListing> {
        if let Some(listing) = self.fresh_entry().await {
            return Ok(listing);
        }

        let _guard = self.refresh.lock().await;
        // A concurrent caller may have refreshed while this one waited.
        if let Some(listing) = self.fresh_entry().await {
            return Ok(listing);
        }

        match aggregate(self.store.as_ref(), &self.root_ref, self.limits).await {
            Ok(assets) => {
                let assets = Arc::new(assets);
                info!(assets = assets.len(), "Gallery aggregation refreshed");
                *self.entry.write().await = Some(CacheEntry {
                    assets: assets.clone(),
                    fetched_at: self.clock.now(),
                });
                Ok(GalleryListing {
                    assets,
                    source: ListingSource::Fresh,
                })
            }
            Err(err) => self.fall_back(err).await,
        }
    }

    async fn fresh_entry(&self) -> Option<GalleryListing> {
        let entry = self.entry.read().await;
        let entry = entry.as_ref()?;
        let age = self.clock.now().saturating_duration_since(entry.fetched_at);
        if age < self.ttl {
            debug!(age_secs = age.as_secs(), "Serving cached gallery aggregation");
            Some(GalleryListing {
                assets: entry.assets.clone(),
                source: ListingSource::Cached,
            })
        } else {
            None
        }
    }

    /// Upstream refresh failed: serve the stale entry if one exists, else the
    /// bundled seed dataset. The stale entry's timestamp is left untouched so
    /// the next call retries upstream.
    async fn fall_back(&self, err: StoreError) -> StoreResult<GalleryListing> {
        if let Some(entry) = self.entry.read().await.as_ref() {
            warn!(error = %err, "Upstream aggregation failed, serving stale cache entry");
            return Ok(GalleryListing {
                assets: entry.assets.clone(),
                source: ListingSource::Stale,
            });
        }
        if self.seed_enabled {
            warn!(error = %err, "Upstream aggregation failed with cold cache, serving seed dataset");
            return Ok(GalleryListing {
                assets: Arc::new(seed_assets().to_vec()),
                source: ListingSource::Seed,
            });
        }
        Err(err)
    }
}
