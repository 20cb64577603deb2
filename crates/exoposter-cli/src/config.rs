//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use exoposter::{ExopError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ExopError {
    fn from(err: ConfigError) -> Self {
        ExopError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (exoposter/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ExopError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:? = path; "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("exoposter/config.toml");
    if local_config.exists() {
        info!(path:? = local_config; "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "exoposter", "exoposter") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path:? = system_config; "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path:? = system_config; "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ExopError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AppConfig, ExopError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use exoposter::scene::{Color, Font, PageSize};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r##"
            [catalog]
            root = "/data/oec"
            fail_fast = true

            [names]
            catalog_prefixes = ["HD", "GJ"]

            [poster]
            page_size = "A2"
            system_count = 40
            max_extent = 3.5

            [style]
            font = "sans-serif"
            background_color = "#fffef0"

            [style.palette]
            green = "#2e8b57"
            "##,
        )
        .unwrap();

        assert_eq!(config.catalog().root(), Path::new("/data/oec"));
        assert!(config.catalog().fail_fast());
        assert_eq!(config.catalog().reference_system(), "Sun");
        assert_eq!(config.names().resolver().prefixes().len(), 2);
        assert_eq!(config.poster().page_size(), PageSize::A2);
        assert_eq!(config.poster().system_count(), 40);
        assert_eq!(config.poster().max_extent(), 3.5);
        assert_eq!(config.poster().target_distance(), 1.0);
        assert_eq!(config.style().font(), Font::SansSerif);
        assert!(config.style().background_color().unwrap().is_some());
        assert_ne!(config.style().palette().unwrap().css(Color::Green), "green");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.poster().system_count(), 100);
        assert_eq!(config.catalog().reference_system(), "Sun");
        assert_eq!(config.style().font(), Font::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = parse_config("[poster]\nsystem_count = \"many\"").unwrap_err();
        assert!(matches!(err, ExopError::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[poster]\nsystem_count = 10\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.poster().system_count(), 10);
    }
}
