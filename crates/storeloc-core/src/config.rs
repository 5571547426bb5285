use crate::app_config::{AppConfig, DEFAULT_SITEMAP_PATH};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed, or if
/// the request timeout is zero.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let sitemap_path = PathBuf::from(or_default("STORELOC_SITEMAP_PATH", DEFAULT_SITEMAP_PATH));
    let log_level = or_default("STORELOC_LOG_LEVEL", "warn");
    let request_timeout_secs = parse_u64("STORELOC_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STORELOC_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let inter_request_delay_ms = parse_u64("STORELOC_INTER_REQUEST_DELAY_MS", "100")?;
    let user_agent = lookup("STORELOC_USER_AGENT")
        .ok()
        .filter(|ua| !ua.trim().is_empty());

    Ok(AppConfig {
        sitemap_path,
        log_level,
        request_timeout_secs,
        inter_request_delay_ms,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
