//! Registration store client.
//!
//! Upserts gallery registrations by email against the external registration
//! store: update the contact when one with that email already exists, create
//! it otherwise. No-op construction when the backend is not configured; the
//! access endpoint then reports a configuration error.

use std::time::Duration;

use async_trait::async_trait;
use gala_core::{AppError, Config, RegistrationForm};
use serde::Deserialize;

const REGISTRATION_TIMEOUT_SECS: u64 = 10;

/// Result of an upsert: whether the email was already registered.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationOutcome {
    pub is_existing_user: bool,
}

/// Seam over the external registration store so tests can substitute a
/// recording fake for the HTTP client.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn upsert(&self, form: &RegistrationForm) -> Result<RegistrationOutcome, AppError>;
}

#[derive(Clone)]
pub struct RegistrationService {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ContactSearchResponse {
    #[serde(default)]
    contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize)]
struct Contact {
    id: String,
}

impl RegistrationService {
    /// Create the service from config. Returns `None` when the registration
    /// backend URL or key is absent.
    pub fn from_config(config: &Config) -> Option<Self> {
        let base_url = config.registration_api_url.as_deref()?;
        let api_key = config.registration_api_key.as_deref()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REGISTRATION_TIMEOUT_SECS))
            .build()
            .ok()?;

        tracing::info!("Registration service initialized");
        Some(RegistrationService {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<String>, AppError> {
        let response = self
            .http
            .get(format!("{}/contacts", self.base_url))
            .query(&[("email", email)])
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "registration lookup returned {}",
                response.status()
            )));
        }

        let body: ContactSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;
        Ok(body.contacts.into_iter().next().map(|c| c.id))
    }
}

#[async_trait]
impl RegistrationBackend for RegistrationService {
    /// Upsert a registration by email. Update when a contact with that email
    /// exists, create otherwise.
    async fn upsert(&self, form: &RegistrationForm) -> Result<RegistrationOutcome, AppError> {
        let existing = self.find_by_email(&form.email).await?;

        match existing {
            Some(contact_id) => {
                let response = self
                    .http
                    .put(format!("{}/contacts/{}", self.base_url, contact_id))
                    .bearer_auth(&self.api_key)
                    .json(form)
                    .send()
                    .await
                    .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;
                if !response.status().is_success() {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "registration update returned {}",
                        response.status()
                    )));
                }
                Ok(RegistrationOutcome {
                    is_existing_user: true,
                })
            }
            None => {
                let response = self
                    .http
                    .post(format!("{}/contacts", self.base_url))
                    .bearer_auth(&self.api_key)
                    .json(form)
                    .send()
                    .await
                    .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;
                if !response.status().is_success() {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "registration create returned {}",
                        response.status()
                    )));
                }
                Ok(RegistrationOutcome {
                    is_existing_user: false,
                })
            }
        }
    }
}
