//! Application configuration
//!
//! Loaded from a TOML file (`~/.config/blog-service/config.toml` by default,
//! or the path in `$BLOG_CONFIG`). A missing file is created with defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default rate-limit window for view counting, in seconds.
pub const DEFAULT_VIEW_WINDOW_SECS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blog-service")
        .join("config.toml")
}

/// Deployment environment. Controls how much error detail reaches clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub views: ViewsConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Database URL (e.g. "sqlite://./blog.db?mode=rwc")
    pub url: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./blog.db?mode=rwc".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseSection {
    /// `DATABASE_URL` wins over the file value.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or any EnvFilter directive)
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Where view counters and rate-limit marks are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStoreKind {
    /// Database tables (`post_views`, `rate_limits`)
    #[default]
    Sql,
    /// Process memory; counts are lost on restart
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// A client is counted at most once per article within this window
    pub window_secs: u64,
    /// Proxy header carrying the client IP
    pub client_ip_header: String,
    /// Store SHA-256 digests of client identifiers instead of raw IPs
    pub hash_client_ids: bool,
    /// How often expired rate-limit marks are evicted (0 disables the sweeper)
    pub sweep_interval_secs: u64,
    pub store: ViewStoreKind,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_VIEW_WINDOW_SECS,
            client_ip_header: "CF-Connecting-IP".to_string(),
            hash_client_ids: true,
            sweep_interval_secs: 600,
            store: ViewStoreKind::Sql,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// "*" or a single origin
    pub allowed_origin: String,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            max_age_secs: 86400,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, writing defaults there if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.views.window_secs == 0 {
            return Err(ConfigError::Invalid(
                "views.window_secs must be greater than zero".to_string(),
            ));
        }
        if self.views.client_ip_header.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "views.client_ip_header must not be empty".to_string(),
            ));
        }
        if self.database.pool.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.pool.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.views.window_secs, 300);
        assert_eq!(cfg.views.client_ip_header, "CF-Connecting-IP");
        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.views.store, ViewStoreKind::Sql);
    }

    #[test]
    fn partial_sections_are_merged_with_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            environment = "development"

            [server]
            port = 9000

            [views]
            window_secs = 60
            store = "memory"
            "#,
        )
        .unwrap();

        assert!(cfg.environment.is_development());
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.views.window_secs, 60);
        assert_eq!(cfg.views.store, ViewStoreKind::Memory);
        assert!(cfg.views.hash_client_ids);
    }

    #[test]
    fn zero_window_is_rejected() {
        let err = AppConfig::from_toml("[views]\nwindow_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("blog-service-cfg-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let cfg = AppConfig::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.server.port, 8787);

        let reloaded = AppConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, cfg.server.port);

        let _ = std::fs::remove_dir_all(dir);
    }
}
