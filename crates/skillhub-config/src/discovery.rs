//! Well-known locations and environment variables.

use std::path::PathBuf;

/// Application name used for the config directory.
const APP_NAME: &str = "skillhub";

/// Overrides the config directory (tests, portable installs).
pub const CONFIG_DIR_ENV: &str = "SKILLHUB_CONFIG_DIR";

/// Overrides the backend base URL.
pub const API_URL_ENV: &str = "SKILLHUB_API_URL";

/// Get the skillhub config directory (`~/.config/skillhub` on Linux).
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Directory the CLI writes rolling logs to.
pub fn log_dir() -> PathBuf {
    xdg_config_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
