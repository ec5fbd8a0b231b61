//! Process configuration: an optional TOML file for the identity endpoint
//! plus one required secret from the environment.

mod loader;

pub use loader::ConfigError;

use serde::{Deserialize, Serialize};

/// Environment variable holding the identity provider API key.
pub const API_KEY_ENV: &str = "FIREBASE_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the identity provider.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

/// Reads the provider API key from the environment.
///
/// The key is required at startup; the caller treats absence as fatal before
/// the terminal enters raw mode.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey { var: API_KEY_ENV }),
    }
}
