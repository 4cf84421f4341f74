//! Gallery access registration endpoint.
//!
//! Accepting a registration is the server-side half of the access gate: the
//! browser flips its session-scoped `Unlocked` flag only after this endpoint
//! returns 200. The submission is upserted by email into the external
//! registration store; no gallery session state is kept server-side.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use gala_core::{AppError, RegistrationForm};
use serde::Serialize;
use validator::Validate;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessResponse {
    pub message: String,
    pub is_existing_user: bool,
}

/// `POST /gallery/access` - register a visitor and unlock the gallery.
pub async fn register_access(
    State(state): State<Arc<AppState>>,
    ValidatedJson(form): ValidatedJson<RegistrationForm>,
) -> Result<impl IntoResponse, HttpAppError> {
    form.validate().map_err(AppError::from)?;

    let registration = state.access.registration.as_ref().ok_or_else(|| {
        AppError::ConfigurationMissing("REGISTRATION_API_URL".to_string())
    })?;

    let outcome = registration.upsert(&form).await.map_err(|e| {
        tracing::error!(error = %e, "Registration upsert failed");
        HttpAppError::from(e)
    })?;

    tracing::info!(
        is_existing_user = outcome.is_existing_user,
        subscribed = form.subscribe_to_newsletter,
        "Gallery access registration accepted"
    );

    let message = if outcome.is_existing_user {
        "Registration updated, enjoy the gallery".to_string()
    } else {
        "Registration complete, enjoy the gallery".to_string()
    };

    Ok(Json(AccessResponse {
        message,
        is_existing_user: outcome.is_existing_user,
    }))
}
