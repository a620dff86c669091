use serde::Deserialize;

use crate::utils::constants::{DEFAULT_SCHEME, METADATA_TOKEN_URL};

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CloudConfig {
    /// falls back to `GCP_PROJECT` when absent
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetadataConfig {
    #[serde(default = "default_metadata_url")]
    pub url: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { url: default_metadata_url() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// per-request timeout, none by default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            scheme: default_scheme(),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

fn default_metadata_url() -> String {
    METADATA_TOKEN_URL.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}
