//! Configuration validation
//!
//! Validates critical configuration values at startup to catch
//! misconfigurations early, before the first request arrives.

use anyhow::Result;
use gala_core::Config;

/// Validate critical configuration values. The required upstream settings
/// were already enforced by `Config::from_env`; this checks the values make
/// sense together.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.is_production() && config.cors_origins.iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Set specific allowed origins via the CORS_ORIGINS environment variable."
        ));
    }

    if config.gallery_cache_ttl_secs == 0 {
        tracing::warn!("GALLERY_CACHE_TTL_SECS is 0, every listing request will hit upstream");
    }

    if config.upstream_timeout_secs == 0 {
        return Err(anyhow::anyhow!("Upstream request timeout cannot be 0"));
    }

    if config.max_tree_depth == 0 || config.max_folders_visited == 0 {
        return Err(anyhow::anyhow!(
            "Tree walk caps must be positive (GALLERY_MAX_TREE_DEPTH, GALLERY_MAX_FOLDERS)"
        ));
    }

    if config.registration_api_url.is_some() && config.registration_api_key.is_none() {
        return Err(anyhow::anyhow!(
            "REGISTRATION_API_URL is set but REGISTRATION_API_KEY is missing"
        ));
    }

    Ok(())
}
