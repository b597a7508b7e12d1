//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Starts from a config file if one is found (or built-in defaults)
//! 2. Applies environment variable overrides on top
//! 3. Supports JSON and TOML formats
//!
//! Every setting has a default, so all sources are optional.
//!
//! ## Environment Variables
//! - `DOGDEX_API_BASE_URL`: Base URL of the breed listing service
//! - `DOGDEX_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `DOGDEX_USER_AGENT`: User agent sent with every request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json` (current working directory)
//! 2. `./dogdex.toml` or `./dogdex.json` (current working directory)

use std::path::{Path, PathBuf};

use dogdex_domain::{Config, DogdexError, Result};

/// Load configuration with automatic fallback strategy
///
/// Starts from a config file when one is found in a standard location,
/// otherwise from built-in defaults, then applies environment variable
/// overrides.
///
/// # Errors
/// Returns `DogdexError::Config` if a found file is malformed or an
/// environment override has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, using built-in defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DogdexError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DogdexError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DogdexError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DogdexError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DogdexError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DogdexError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DogdexError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let candidates = vec![
        cwd.join("config.toml"),
        cwd.join("config.json"),
        cwd.join("dogdex.toml"),
        cwd.join("dogdex.json"),
    ];

    candidates.into_iter().find(|path| path.exists())
}

/// Apply environment variable overrides to a loaded configuration
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(base_url) = std::env::var("DOGDEX_API_BASE_URL") {
        config.dog_api.base_url = base_url;
    }

    if let Ok(timeout) = std::env::var("DOGDEX_HTTP_TIMEOUT_SECS") {
        config.dog_api.timeout_seconds = timeout
            .parse::<u64>()
            .map_err(|e| DogdexError::Config(format!("Invalid timeout: {}", e)))?;
    }

    if let Ok(agent) = std::env::var("DOGDEX_USER_AGENT") {
        config.dog_api.user_agent = agent;
    }

    Ok(())
}
