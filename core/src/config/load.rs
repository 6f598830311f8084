use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

/// Get the default triage data directory: ~/.triage
pub fn get_triage_data_dir() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".triage"))
}

pub fn load_default() -> Result<AppConfig, ConfigError> {
    // Priority 1: ~/.triage/config.toml (highest)
    let user_config = get_triage_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok())?;
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })
}

/// Environment variable overrides (Priority 0: highest)
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, get: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |k: &str| get(k).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("TRIAGE_LOG_LEVEL") {
        cfg.logging.level = v;
    }
    if let Some(v) = non_empty("TRIAGE_OUTPUT_FORMAT") {
        cfg.output.format = v.parse().map_err(|_| ConfigError::InvalidValue {
            key: "TRIAGE_OUTPUT_FORMAT",
            value: v.clone(),
        })?;
    }
    if let Some(v) = non_empty("TRIAGE_WATCH_INTERVAL_MS") {
        cfg.watch.interval_ms = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: "TRIAGE_WATCH_INTERVAL_MS",
            value: v.clone(),
        })?;
    }
    Ok(())
}
