//! Google Drive implementation of `RemoteStore`.
//!
//! Talks to the Drive v3 REST API with an API key. The key never leaves this
//! process; the browser only sees proxy URLs.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::traits::{ListPage, RemoteEntry, RemoteMetadata, RemoteStore, StoreError, StoreResult};
use async_trait::async_trait;
use bytes::Bytes;

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";
const LIST_PAGE_SIZE: u32 = 100;

/// Google Drive storage backend.
#[derive(Clone)]
pub struct DriveStore {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFileList {
    next_page_token: Option<String>,
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: Option<String>,
    mime_type: String,
}

impl DriveStore {
    /// Create a new Drive client with explicit timeouts. Drive's own
    /// defaults are effectively unbounded, so both the connect and the
    /// overall request timeout are set here.
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> StoreResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(DriveStore {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn map_status(status: StatusCode, reference: &str) -> StoreError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                StoreError::Auth(format!("upstream returned {status}"))
            }
            StatusCode::NOT_FOUND => StoreError::NotFound(reference.to_string()),
            other => StoreError::Transport(format!("upstream returned {other}")),
        }
    }

    /// Drive file ids are URL-safe tokens. Anything else is rejected before
    /// it can reach a query string.
    fn check_ref(reference: &str) -> StoreResult<()> {
        let ok = !reference.is_empty()
            && reference
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if ok {
            Ok(())
        } else {
            Err(StoreError::InvalidRef(reference.to_string()))
        }
    }
}

#[async_trait]
impl RemoteStore for DriveStore {
    async fn list_children(
        &self,
        folder_ref: &str,
        page_token: Option<&str>,
    ) -> StoreResult<ListPage> {
        Self::check_ref(folder_ref)?;

        let query = format!("'{}' in parents and trashed = false", folder_ref);
        let mut request = self
            .http
            .get(format!("{}/files", self.api_base))
            .query(&[
                ("q", query.as_str()),
                ("fields", "nextPageToken, files(id, name, mimeType)"),
                ("key", self.api_key.as_str()),
            ])
            .query(&[("pageSize", LIST_PAGE_SIZE)]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::map_status(response.status(), folder_ref));
        }

        let body: DriveFileList = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        let entries = body
            .files
            .into_iter()
            .map(|file| {
                if file.mime_type == FOLDER_MIME_TYPE {
                    RemoteEntry::Folder {
                        name: file.name.clone().unwrap_or_else(|| file.id.clone()),
                        id: file.id,
                    }
                } else {
                    RemoteEntry::File {
                        name: file.name,
                        mime_type: file.mime_type,
                        id: file.id,
                    }
                }
            })
            .collect();

        Ok(ListPage {
            entries,
            next_page_token: body.next_page_token,
        })
    }

    async fn download(&self, file_ref: &str) -> StoreResult<Bytes> {
        Self::check_ref(file_ref)?;

        let response = self
            .http
            .get(format!("{}/files/{}", self.api_base, file_ref))
            .query(&[("alt", "media"), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::map_status(response.status(), file_ref));
        }

        response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))
    }

    async fn metadata(&self, file_ref: &str) -> StoreResult<RemoteMetadata> {
        Self::check_ref(file_ref)?;

        let response = self
            .http
            .get(format!("{}/files/{}", self.api_base, file_ref))
            .query(&[("fields", "name, mimeType"), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::map_status(response.status(), file_ref));
        }

        let file: DriveFile = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        Ok(RemoteMetadata {
            name: file.name,
            mime_type: Some(file.mime_type),
        })
    }
}
