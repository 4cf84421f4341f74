//! In-memory fakes for the upstream store and the registration backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use gala_api::{RegistrationBackend, RegistrationOutcome};
use gala_core::{AppError, RegistrationForm};
use gala_store::{ListPage, RemoteEntry, RemoteMetadata, RemoteStore, StoreError, StoreResult};

/// In-memory folder tree plus file contents.
pub struct FakeDrive {
    folders: HashMap<String, Vec<RemoteEntry>>,
    files: HashMap<String, (Bytes, RemoteMetadata)>,
    pub list_calls: AtomicUsize,
    pub failing: AtomicBool,
}

impl FakeDrive {
    pub fn new(
        folders: HashMap<String, Vec<RemoteEntry>>,
        files: HashMap<String, (Bytes, RemoteMetadata)>,
    ) -> Self {
        FakeDrive {
            folders,
            files,
            list_calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// A broken upstream with nothing in it.
    pub fn unavailable() -> Self {
        let drive = FakeDrive::new(HashMap::new(), HashMap::new());
        drive.failing.store(true, Ordering::SeqCst);
        drive
    }

    fn folder(id: &str, name: &str) -> RemoteEntry {
        RemoteEntry::Folder {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn image(id: &str, name: &str) -> RemoteEntry {
        RemoteEntry::File {
            id: id.to_string(),
            name: Some(name.to_string()),
            mime_type: "image/jpeg".to_string(),
        }
    }

    /// Root with a "Red Carpet" folder (2 images) and a "Music Performance"
    /// folder (3 images), plus downloadable content for one asset.
    pub fn event_tree() -> Self {
        let mut folders = HashMap::new();
        folders.insert(
            "root".to_string(),
            vec![
                Self::folder("f-rc", "Red Carpet"),
                Self::folder("f-music", "Music Performance"),
            ],
        );
        folders.insert(
            "f-rc".to_string(),
            vec![
                Self::image("rc1", "arrival-01.jpg"),
                Self::image("rc2", "arrival-02.jpg"),
            ],
        );
        folders.insert(
            "f-music".to_string(),
            vec![
                Self::image("m1", "set-01.jpg"),
                Self::image("m2", "set-02.jpg"),
                Self::image("m3", "set-03.jpg"),
            ],
        );

        let mut files = HashMap::new();
        files.insert(
            "rc1".to_string(),
            (
                Bytes::from_static(b"\xff\xd8\xff\xe0fake-jpeg-bytes"),
                RemoteMetadata {
                    name: Some("arrival-01.jpg".to_string()),
                    mime_type: Some("image/jpeg".to_string()),
                },
            ),
        );
        files.insert(
            "m1".to_string(),
            (
                Bytes::from_static(b"RIFFfake-webp"),
                RemoteMetadata {
                    name: Some("set-01.jpg".to_string()),
                    mime_type: Some("image/webp".to_string()),
                },
            ),
        );

        FakeDrive::new(folders, files)
    }
}

#[async_trait]
impl RemoteStore for FakeDrive {
    async fn list_children(
        &self,
        folder_ref: &str,
        _page_token: Option<&str>,
    ) -> StoreResult<ListPage> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let entries = self
            .folders
            .get(folder_ref)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(folder_ref.to_string()))?;
        Ok(ListPage {
            entries,
            next_page_token: None,
        })
    }

    async fn download(&self, file_ref: &str) -> StoreResult<Bytes> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        self.files
            .get(file_ref)
            .map(|(bytes, _)| bytes.clone())
            .ok_or_else(|| StoreError::NotFound(file_ref.to_string()))
    }

    async fn metadata(&self, file_ref: &str) -> StoreResult<RemoteMetadata> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        self.files
            .get(file_ref)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| StoreError::NotFound(file_ref.to_string()))
    }
}

/// Recording registration backend with a pre-seedable set of known emails.
#[derive(Default)]
pub struct FakeRegistration {
    pub known_emails: Mutex<Vec<String>>,
    pub submissions: Mutex<Vec<RegistrationForm>>,
    pub failing: AtomicBool,
}

impl FakeRegistration {
    pub fn seed_email(&self, email: &str) {
        self.known_emails.lock().unwrap().push(email.to_string());
    }
}

#[async_trait]
impl RegistrationBackend for FakeRegistration {
    async fn upsert(&self, form: &RegistrationForm) -> Result<RegistrationOutcome, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::UpstreamUnavailable(
                "registration store unreachable".to_string(),
            ));
        }
        let mut known = self.known_emails.lock().unwrap();
        let is_existing_user = known.contains(&form.email);
        if !is_existing_user {
            known.push(form.email.clone());
        }
        self.submissions.lock().unwrap().push(form.clone());
        Ok(RegistrationOutcome { is_existing_user })
    }
}
