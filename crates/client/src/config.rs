//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `QUILLPRESS_API_URL` - Base URL all request paths are resolved against
//!   (default: `http://localhost:3000/api`)
//! - `QUILLPRESS_HOME` - Directory holding persisted client state such as the
//!   credential file (default: `~/.quillpress`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL, matching a locally running API server.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Directory under the home directory used when `QUILLPRESS_HOME` is unset.
const DEFAULT_HOME_DIR: &str = ".quillpress";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Could not determine a home directory; set QUILLPRESS_HOME")]
    NoHomeDir,
}

/// Client configuration.
///
/// Resolved once at process start; every [`crate::ApiClient`] keeps a copy of
/// the base URL and resolves relative request paths against it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the backend, without a trailing slash.
    pub base_url: String,
    /// Directory holding persisted client state (credential file).
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `QUILLPRESS_API_URL` is not a valid URL, or
    /// if no home directory can be found while `QUILLPRESS_HOME` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("QUILLPRESS_API_URL", DEFAULT_API_URL);
        let state_dir = match std::env::var("QUILLPRESS_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(DEFAULT_HOME_DIR),
        };

        Self::new(&base_url, state_dir)
    }

    /// Build a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, state_dir: PathBuf) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("QUILLPRESS_API_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            state_dir,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
