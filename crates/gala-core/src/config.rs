//! Configuration module
//!
//! Env-driven configuration for the gallery service. The upstream store
//! credentials and root folder are required; the service refuses to start
//! without them rather than degrading silently.

use std::env;

use crate::error::AppError;

// Defaults
const DEFAULT_PORT: u16 = 8080;
const GALLERY_CACHE_TTL_SECS: u64 = 3600;
const UPSTREAM_TIMEOUT_SECS: u64 = 10;
const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;
const MAX_TREE_DEPTH: usize = 10;
const MAX_FOLDERS_VISITED: usize = 200;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Upstream store (Google Drive)
    pub drive_api_key: String,
    pub gallery_root_folder_id: String,
    pub drive_api_base: String,
    pub upstream_timeout_secs: u64,
    pub upstream_connect_timeout_secs: u64,
    // Aggregation
    pub gallery_cache_ttl_secs: u64,
    pub max_tree_depth: usize,
    pub max_folders_visited: usize,
    pub seed_enabled: bool,
    // External registration store
    pub registration_api_url: Option<String>,
    pub registration_api_key: Option<String>,
}

impl Config {
    /// Load configuration from the environment. Fails fast with
    /// `ConfigurationMissing` when the upstream credentials or the gallery
    /// root folder are absent.
    pub fn from_env() -> Result<Self, AppError> {
        let drive_api_key = require_env("DRIVE_API_KEY")?;
        let gallery_root_folder_id = require_env("GALLERY_ROOT_FOLDER_ID")?;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: parse_env("PORT", DEFAULT_PORT),
            environment,
            cors_origins,
            drive_api_key,
            gallery_root_folder_id,
            drive_api_base: env::var("DRIVE_API_BASE")
                .unwrap_or_else(|_| "https://www.googleapis.com/drive/v3".to_string()),
            upstream_timeout_secs: parse_env("UPSTREAM_TIMEOUT_SECS", UPSTREAM_TIMEOUT_SECS),
            upstream_connect_timeout_secs: parse_env(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                UPSTREAM_CONNECT_TIMEOUT_SECS,
            ),
            gallery_cache_ttl_secs: parse_env("GALLERY_CACHE_TTL_SECS", GALLERY_CACHE_TTL_SECS),
            max_tree_depth: parse_env("GALLERY_MAX_TREE_DEPTH", MAX_TREE_DEPTH),
            max_folders_visited: parse_env("GALLERY_MAX_FOLDERS", MAX_FOLDERS_VISITED),
            seed_enabled: env::var("GALLERY_SEED_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            registration_api_url: env::var("REGISTRATION_API_URL").ok(),
            registration_api_key: env::var("REGISTRATION_API_KEY").ok(),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn require_env(name: &'static str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigurationMissing(name.to_string())),
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var mutation is process-global; these tests set unique names to
    // stay independent of each other.

    #[test]
    fn require_env_rejects_missing_and_blank() {
        assert!(matches!(
            require_env("GALA_TEST_MISSING_VAR"),
            Err(AppError::ConfigurationMissing(_))
        ));
        std::env::set_var("GALA_TEST_BLANK_VAR", "  ");
        let blank = require_env("GALA_TEST_BLANK_VAR");
        std::env::remove_var("GALA_TEST_BLANK_VAR");
        assert!(matches!(blank, Err(AppError::ConfigurationMissing(_))));
    }

    #[test]
    fn parse_env_falls_back_on_garbage() {
        std::env::set_var("GALA_TEST_PARSE_VAR", "not-a-number");
        let value: u64 = parse_env("GALA_TEST_PARSE_VAR", 42);
        std::env::remove_var("GALA_TEST_PARSE_VAR");
        assert_eq!(value, 42);
    }
}
