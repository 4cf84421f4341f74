//! Gala Core Library
//!
//! This crate provides the domain types, taxonomy classifier, client-session
//! state machines, configuration, and error types shared across the gala
//! gallery components.

pub mod access;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod taxonomy;
pub mod viewer;

// Re-export commonly used types
pub use access::{AccessGate, RegistrationForm};
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Asset, Category, CategoryFilter};
pub use taxonomy::classify;
pub use viewer::{ViewerKey, ViewerState};
