//! Configuration structures

use serde::{Deserialize, Serialize};

/// Default base URL of the dog.ceo API.
pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dog_api: DogApiConfig,
}

/// Configuration for the dog.ceo API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogApiConfig {
    /// Base URL of the breed listing service (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    format!("dogdex/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_dog_ceo() {
        let config = DogApiConfig::default();
        assert_eq!(config.base_url, "https://dog.ceo/api");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("dogdex/"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
[dog_api]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();

        assert_eq!(config.dog_api.base_url, "http://localhost:8080");
        assert_eq!(config.dog_api.timeout_seconds, 30);
    }

    #[test]
    fn empty_json_uses_all_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.dog_api.base_url, DEFAULT_API_BASE_URL);
    }
}
