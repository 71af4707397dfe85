use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// User agent matching the Chrome build the launch arguments claim to be.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Load run configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var carries an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load run configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var carries an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build run configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("GISGRAB_BASE_URL", "https://2gis.ru");
    let output_path = PathBuf::from(or_default("GISGRAB_OUTPUT_PATH", "2gis_results.csv"));

    let stable_cycles = parse_u32("GISGRAB_STABLE_CYCLES", "3")?;
    let scroll_settle_ms = parse_u64("GISGRAB_SCROLL_SETTLE_MS", "3000")?;
    let detail_settle_ms = parse_u64("GISGRAB_DETAIL_SETTLE_MS", "1500")?;
    let panel_wait_secs = parse_u64("GISGRAB_PANEL_WAIT_SECS", "20")?;
    let list_wait_secs = parse_u64("GISGRAB_LIST_WAIT_SECS", "30")?;
    let detail_wait_secs = parse_u64("GISGRAB_DETAIL_WAIT_SECS", "20")?;

    let user_agent = or_default("GISGRAB_USER_AGENT", DEFAULT_USER_AGENT);
    let headless = parse_bool("GISGRAB_HEADLESS", "false")?;

    Ok(AppConfig {
        base_url,
        output_path,
        stable_cycles,
        scroll_settle: Duration::from_millis(scroll_settle_ms),
        detail_settle: Duration::from_millis(detail_settle_ms),
        panel_wait: Duration::from_secs(panel_wait_secs),
        list_wait: Duration::from_secs(list_wait_secs),
        detail_wait: Duration::from_secs(detail_wait_secs),
        user_agent,
        headless,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
