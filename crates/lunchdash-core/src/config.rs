use std::path::PathBuf;

use chrono_tz::Tz;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Read `LUNCHDASH_*` settings, after merging a `.env` file if one exists.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but unparseable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but reads the process environment only.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but unparseable.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Every variable has a default, so an empty environment is valid.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_limit = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("LUNCHDASH_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("LUNCHDASH_DATA_DIR", "./data"));
    let username = or_default("LUNCHDASH_USERNAME", "davis_big_dawg");
    if username.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LUNCHDASH_USERNAME".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let timezone = parse_timezone(&or_default("LUNCHDASH_TIMEZONE", "America/Los_Angeles"))?;
    let timezone_label = or_default("LUNCHDASH_TIMEZONE_LABEL", "PT");

    let top_posts_limit = parse_limit("LUNCHDASH_TOP_POSTS_LIMIT", "6")?;
    let food_frequency_limit = parse_limit("LUNCHDASH_FOOD_FREQUENCY_LIMIT", "10")?;

    Ok(AppConfig {
        log_level,
        data_dir,
        username,
        timezone,
        timezone_label,
        top_posts_limit,
        food_frequency_limit,
    })
}

fn parse_timezone(raw: &str) -> Result<Tz, ConfigError> {
    raw.parse::<Tz>().map_err(|e| ConfigError::InvalidEnvVar {
        var: "LUNCHDASH_TIMEZONE".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
