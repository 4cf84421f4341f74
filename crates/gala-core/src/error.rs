//! Error types module
//!
//! All gallery errors are unified under the `AppError` enum: bad input from
//! the browser, upstream store failures, missing configuration, and internal
//! faults. The `ErrorMetadata` trait lets each variant self-describe how it
//! should be presented over HTTP.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for degraded-but-handled conditions
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPSTREAM_UNAVAILABLE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream store unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(format!("Validation error: {}", err))
    }
}

/// Static metadata per variant: (http_status, error_code, sensitive, log_level).
/// client_message stays per-variant for dynamic content.
fn static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::BadRequest(_) => (400, "BAD_REQUEST", false, LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::UpstreamUnavailable(_) => (500, "UPSTREAM_UNAVAILABLE", true, LogLevel::Error),
        AppError::ConfigurationMissing(_) => (500, "CONFIGURATION_MISSING", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            // Upstream identity and configuration details never reach the
            // browser; these collapse to a generic message.
            AppError::UpstreamUnavailable(_) => "Upstream service unavailable".to_string(),
            AppError::ConfigurationMissing(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }

    fn is_sensitive(&self) -> bool {
        static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        static_metadata(self).3
    }
}

impl AppError {
    /// Full internal message, including source chain where present.
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {:#}", message, source)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::BadRequest("missing id".into()).http_status_code(), 400);
        assert_eq!(AppError::NotFound("no asset".into()).http_status_code(), 404);
        assert_eq!(
            AppError::UpstreamUnavailable("drive listing failed".into()).http_status_code(),
            500
        );
        assert_eq!(
            AppError::ConfigurationMissing("DRIVE_API_KEY".into()).http_status_code(),
            500
        );
    }

    #[test]
    fn upstream_details_are_hidden_from_clients() {
        let err = AppError::UpstreamUnavailable("403 from drive.googleapis.com".into());
        assert!(err.is_sensitive());
        assert!(!err.client_message().contains("drive"));
    }

    #[test]
    fn bad_request_message_passes_through() {
        let err = AppError::BadRequest("Missing required parameter: id".into());
        assert_eq!(err.client_message(), "Missing required parameter: id");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }
}
