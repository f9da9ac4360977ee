//! Server and database configuration
//!
//! Loaded from an optional TOML file; every field has a default so an
//! empty file (or no file) yields a working local setup:
//!
//! ```toml
//! [server]
//! bind_addr = "0.0.0.0:8080"
//! env = "production"
//! max_page_size = 50
//!
//! [database]
//! url = "postgres://quotes:secret@db:5432/quotes"
//! max_connections = 20
//! ```
//!
//! Values are resolved once at startup and moved into the components that
//! need them; nothing here is read from a global afterwards.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::MAX_PAGE_SIZE;

/// Full service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Environment name reported by /ping (e.g. "development")
    pub env: String,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,

    /// Upper bound for the `limit` query parameter
    pub max_page_size: u32,

    /// Budget for a single repository operation, in seconds
    pub query_timeout_secs: u64,

    /// Budget for a whole HTTP request, in seconds
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            env: "development".to_string(),
            cors_permissive: false,
            max_page_size: MAX_PAGE_SIZE,
            query_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

/// Connection pool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,

    /// Pool ceiling; also the bound on in-flight queries
    pub max_connections: u32,

    /// Idle connections are closed after this many seconds
    pub idle_timeout_secs: u64,

    /// How long a caller waits for a free connection, in seconds
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/quotes".to_string(),
            max_connections: 10,
            idle_timeout_secs: 15 * 60,
            acquire_timeout_secs: 5,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl QuotesConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values that would make the server unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_page_size",
                reason: "must be at least 1",
            });
        }
        if self.server.query_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "server.query_timeout_secs",
                reason: "must be at least 1",
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                field: "database.max_connections",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = QuotesConfig::default();
        assert_eq!(config.server.bind_addr.port(), 8080);
        assert_eq!(config.server.env, "development");
        assert_eq!(config.server.max_page_size, 100);
        assert_eq!(config.server.query_timeout(), Duration::from_secs(10));
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.idle_timeout(), Duration::from_secs(900));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(QuotesConfig::from_toml_str("").unwrap(), QuotesConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = QuotesConfig::from_toml_str(
            r#"
            [server]
            bind_addr = "0.0.0.0:9000"
            max_page_size = 25

            [database]
            url = "postgres://db/quotes"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.server.max_page_size, 25);
        assert_eq!(config.server.env, "development");
        assert_eq!(config.database.url, "postgres://db/quotes");
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = QuotesConfig::from_toml_str("[server]\nmax_page_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "server.max_page_size", .. }));
    }

    #[test]
    fn rejects_bad_toml() {
        let err = QuotesConfig::from_toml_str("[server\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nenv = \"staging\"").unwrap();

        let config = QuotesConfig::load(file.path()).unwrap();
        assert_eq!(config.server.env, "staging");
    }

    #[test]
    fn load_missing_file() {
        let err = QuotesConfig::load(Path::new("/nonexistent/quotes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
