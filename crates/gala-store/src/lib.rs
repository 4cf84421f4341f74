//! Gala Store Library
//!
//! Upstream store abstraction and the gallery aggregation pipeline: the
//! `RemoteStore` trait, its Google Drive implementation, the depth-first tree
//! aggregator, and the TTL-bounded aggregation cache with stale/seed
//! fallback.
//!
//! # Upstream references
//!
//! Folder and file references are opaque upstream identifiers. They stay on
//! the server; the browser only ever sees asset ids through the proxy URL.

pub mod aggregate;
pub mod cache;
pub mod drive;
pub mod traits;

// Re-export commonly used types
pub use aggregate::{aggregate, WalkLimits};
pub use cache::{Clock, GalleryCache, GalleryListing, ListingSource, SystemClock};
pub use drive::DriveStore;
pub use traits::{ListPage, RemoteEntry, RemoteMetadata, RemoteStore, StoreError, StoreResult};
