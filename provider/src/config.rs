//! Configuration helpers backed by process environment variables
//!
//! Environment access is confined to this module. Library code receives the
//! resolved values (or a lookup function) explicitly.

use healthchecksio_common::config::{ProviderConfig, ProviderSettings};

use crate::error::ProviderResult;

/// Log filter environment variable
pub const LOG_LEVEL_ENV: &str = "HEALTHCHECKSIO_LOG_LEVEL";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Look up a process environment variable, treating empty values as unset
///
/// This is the lookup function handed to [`ProviderConfig::resolve`].
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with fallback to a second name
///
/// # Arguments
/// * `primary` - The preferred environment variable name
/// * `fallback` - Consulted only when `primary` is unset or empty
pub fn get_env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    process_env(primary).or_else(|| process_env(fallback))
}

/// Get the log filter directive
///
/// `HEALTHCHECKSIO_LOG_LEVEL`, then `RUST_LOG`, then `info`.
/// `debug = true` overrides both with `debug`.
pub fn get_log_level(debug: bool) -> String {
    if debug {
        return "debug".to_string();
    }
    get_env_with_fallback(LOG_LEVEL_ENV, "RUST_LOG")
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Resolve provider configuration from explicit settings with environment fallback
pub fn resolve_provider_config(settings: ProviderSettings) -> ProviderResult<ProviderConfig> {
    Ok(ProviderConfig::resolve(settings, process_env)?)
}
