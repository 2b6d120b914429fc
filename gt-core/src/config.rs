//! Application configuration management.
//!
//! Holds the Grafana server address, credentials and logging preferences.
//! Configuration is persisted as TOML on disk and is read-only once an API
//! client has been built from it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants;
use crate::error::{GtError, GtResult};
use crate::platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Grafana base URL (e.g., "https://grafana.example.com" or "http://host:3000/grafana").
    #[serde(default)]
    pub url: String,

    /// API key or service account token, sent as a bearer token.
    #[serde(default)]
    pub api_token: String,

    /// Basic auth user. Used only when no API token is configured.
    #[serde(default)]
    pub basic_user: String,

    /// Basic auth password.
    #[serde(default)]
    pub basic_password: String,

    /// Organization sent as `X-Grafana-Org-Id`, if set.
    #[serde(default)]
    pub org_id: Option<u64>,

    /// Custom HTTP headers as key-value pairs.
    #[serde(default)]
    pub custom_headers: HashMap<String, String>,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub timeout_ms: u64,

    /// Whether to accept self-signed TLS certificates from the server.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

/// Credentials attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication header.
    Anonymous,
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// HTTP basic authentication.
    Basic { user: String, password: String },
}

// Default value functions for serde

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_token: String::new(),
            basic_user: String::new(),
            basic_password: String::new(),
            org_id: None,
            custom_headers: HashMap::new(),
            timeout_ms: default_api_timeout(),
            accept_invalid_certs: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ServerConfig {
    /// Credentials derived from the configured token or basic auth pair.
    /// A token wins over basic auth when both are present.
    pub fn credentials(&self) -> Credentials {
        if !self.api_token.is_empty() {
            Credentials::Bearer(self.api_token.clone())
        } else if !self.basic_user.is_empty() {
            Credentials::Basic {
                user: self.basic_user.clone(),
                password: self.basic_password.clone(),
            }
        } else {
            Credentials::Anonymous
        }
    }

    /// Parse the configured URL, failing if it is missing or malformed.
    pub fn base_url(&self) -> GtResult<Url> {
        let sanitized = AppConfig::sanitize_server_url(&self.url);
        if sanitized.is_empty() {
            return Err(GtError::MissingConfig("server.url".into()));
        }
        Url::parse(&sanitized)
            .map_err(|e| GtError::Config(format!("invalid server url {sanitized:?}: {e}")))
    }

    /// Check that the configuration is usable for building a client.
    pub fn validate(&self) -> GtResult<()> {
        self.base_url()?;
        if self.timeout_ms == 0 {
            return Err(GtError::Config("server.timeout_ms must be greater than zero".into()));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> GtResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> GtResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> GtResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GtError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> GtResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> GtResult<PathBuf> {
        if self.logging.directory.is_empty() {
            platform::log_dir()
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Sanitize and normalize a server URL.
    ///
    /// Strips surrounding quotes and whitespace, adds `http://` when no scheme
    /// is given, and removes trailing slashes. Any sub-path is kept.
    pub fn sanitize_server_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
