use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let storefront_domain = require("UPSELL_STOREFRONT_DOMAIN")?;
    let storefront_access_token = require("UPSELL_STOREFRONT_ACCESS_TOKEN")?;
    let variant_ids = parse_variant_ids(&require("UPSELL_VARIANT_IDS")?)?;

    let env = parse_environment(&or_default("UPSELL_ENV", "development"))?;
    let log_level = or_default("UPSELL_LOG_LEVEL", "info");
    let storefront_api_version = or_default("UPSELL_STOREFRONT_API_VERSION", "2024-10");
    let request_timeout_secs = parse_u64("UPSELL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("UPSELL_USER_AGENT", "upsell/0.1 (checkout-upsell)");
    let cart_id = lookup("UPSELL_CART_ID")
        .ok()
        .filter(|v| !v.trim().is_empty());

    Ok(AppConfig {
        env,
        log_level,
        storefront_domain,
        storefront_access_token,
        storefront_api_version,
        variant_ids,
        request_timeout_secs,
        user_agent,
        cart_id,
    })
}

/// Split a comma-separated id list, dropping blanks. At least one id must remain.
fn parse_variant_ids(raw: &str) -> Result<Vec<String>, ConfigError> {
    let ids: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();

    if ids.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "UPSELL_VARIANT_IDS".to_string(),
            reason: "at least one variant id is required".to_string(),
        });
    }
    Ok(ids)
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "UPSELL_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
