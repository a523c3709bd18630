//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, shutdown timing, logging defaults, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// All values are in seconds.

/// Forecast endpoint - constant content
pub const HTTP_CACHE_FORECAST_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_FORECAST_SWR: u32 = 30;

pub const CACHE_CONTROL_FORECAST: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_FORECAST_MAX_AGE,
    HTTP_CACHE_FORECAST_SWR
);

// =============================================================================
// Server Constants
// =============================================================================

/// Seconds to wait for in-flight connections to drain on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "weathercast=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: &[&str] = &["text", "json"];

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Graceful shutdown drain timeout in seconds (default: 30)
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl HttpServerConfig {
    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be nonzero".to_string(),
            ));
        }

        let format = self.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid logging.format '{}'. Valid values: text, json",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let config = AppConfig::parse(
            r#"
            [http]
            host = "127.0.0.1"
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.http.shutdown_timeout_seconds,
            DEFAULT_SHUTDOWN_TIMEOUT_SECS
        );
        assert_eq!(config.logging.format, "text");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_parse_json_logging() {
        let config = AppConfig::parse(
            r#"
            [http]
            host = "0.0.0.0"
            port = 3000
            shutdown_timeout_seconds = 5

            [logging]
            format = "JSON"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.shutdown_timeout_seconds, 5);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_rejects_zero_port() {
        let err = AppConfig::parse(
            r#"
            [http]
            host = "0.0.0.0"
            port = 0
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let err = AppConfig::parse(
            r#"
            [http]
            host = "0.0.0.0"
            port = 3000

            [logging]
            format = "xml"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_missing_http_section_is_parse_error() {
        let err = AppConfig::parse("[logging]\nformat = \"text\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"localhost\"\nport = 9000").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 9000);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_cache_control_header_value() {
        assert_eq!(
            CACHE_CONTROL_FORECAST,
            "public, max-age=60, stale-while-revalidate=30"
        );
    }
}
