//! Upstream store abstraction trait
//!
//! This module defines the `RemoteStore` trait the aggregator and asset proxy
//! run against. The production backend is Google Drive; tests substitute an
//! in-memory tree.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Upstream store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Upstream authentication failed: {0}")]
    Auth(String),

    #[error("Upstream item not found: {0}")]
    NotFound(String),

    #[error("Upstream transport error: {0}")]
    Transport(String),

    #[error("Unexpected upstream response: {0}")]
    InvalidResponse(String),

    #[error("Invalid upstream reference: {0}")]
    InvalidRef(String),
}

/// Result type for upstream store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// One child of an upstream folder. `id` and (for files) `mime_type` are
/// required; `name` is optional and defaulted explicitly by callers instead
/// of relying on loose upstream metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteEntry {
    Folder {
        id: String,
        name: String,
    },
    File {
        id: String,
        name: Option<String>,
        mime_type: String,
    },
}

/// A single page of an upstream folder listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub entries: Vec<RemoteEntry>,
    pub next_page_token: Option<String>,
}

/// Metadata for a single upstream file.
#[derive(Debug, Clone, Default)]
pub struct RemoteMetadata {
    pub name: Option<String>,
    pub mime_type: Option<String>,
}

/// Hierarchical remote file store the gallery reads from.
///
/// Listing is paginated; callers loop until `next_page_token` is `None`.
/// Content and metadata are separate calls because the upstream transfer API
/// does not return the stored content type inline with a content stream.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// List the direct children of a folder, one page at a time.
    async fn list_children(
        &self,
        folder_ref: &str,
        page_token: Option<&str>,
    ) -> StoreResult<ListPage>;

    /// Fetch the full binary content of a file.
    async fn download(&self, file_ref: &str) -> StoreResult<Bytes>;

    /// Fetch the metadata of a file.
    async fn metadata(&self, file_ref: &str) -> StoreResult<RemoteMetadata>;
}
