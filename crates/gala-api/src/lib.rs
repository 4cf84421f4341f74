//! Gala API Library
//!
//! This crate provides the HTTP handlers and application setup for the event
//! gallery service.

// Module declarations
mod handlers;
mod services;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use services::registration::{RegistrationBackend, RegistrationOutcome, RegistrationService};
pub use telemetry::init_tracing;
