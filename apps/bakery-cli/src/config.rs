//! # Configuration
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BAKERY_*`, `RUST_LOG`)
//! 2. Platform data directory
//! 3. Defaults (this file)

use std::path::PathBuf;

use directories::ProjectDirs;

/// Store file name inside the data directory.
pub const STORE_FILE_NAME: &str = "bakery.json";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,bakery=info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the JSON item store.
    pub store_path: PathBuf,

    /// tracing-subscriber filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    /// Store in the working directory, warnings only.
    fn default() -> Self {
        AppConfig {
            store_path: PathBuf::from(STORE_FILE_NAME),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAKERY_STORE_PATH`: Explicit store file path
    /// - `RUST_LOG`: Log filter
    ///
    /// Without `BAKERY_STORE_PATH` the store lives in the platform data
    /// directory:
    /// - **macOS**: `~/Library/Application Support/com.bakery.pos/bakery.json`
    /// - **Windows**: `%APPDATA%\bakery\pos\data\bakery.json`
    /// - **Linux**: `~/.local/share/pos/bakery.json`
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        match std::env::var("BAKERY_STORE_PATH") {
            Ok(path) if !path.trim().is_empty() => config.store_path = PathBuf::from(path),
            _ => {
                if let Some(dirs) = ProjectDirs::from("com", "bakery", "pos") {
                    config.store_path = dirs.data_dir().join(STORE_FILE_NAME);
                }
            }
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.log_filter = filter;
        }

        config
    }

    /// Overrides the store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store_path, PathBuf::from("bakery.json"));
        assert_eq!(config.log_filter, "warn,bakery=info");
    }

    #[test]
    fn test_with_store_path() {
        let config = AppConfig::default().with_store_path("/tmp/shop.json");
        assert_eq!(config.store_path, PathBuf::from("/tmp/shop.json"));
    }
}
