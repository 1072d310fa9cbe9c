//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod capture;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::capture::CaptureConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Media storage settings.
    pub storage: StorageConfig,
    /// Capture workflow settings.
    pub capture: CaptureConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `DAILYDROP_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DAILYDROP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nested keys are joined with a double underscore, but the prefix is
    // joined with a single one: DAILYDROP_SERVER__PORT.
    #[test]
    fn test_env_overrides_use_single_underscore_after_prefix() {
        unsafe {
            std::env::set_var("DAILYDROP_SERVER__PORT", "9090");
            std::env::set_var("DAILYDROP_DATABASE__URL", "postgres://localhost/dailydrop_test");
            std::env::set_var("DAILYDROP_STORAGE__PROVIDER", "local");
            std::env::set_var("DAILYDROP_CAPTURE__PROXIMITY_THRESHOLD_METERS", "45.5");
            std::env::set_var("DAILYDROP_LOGGING__LEVEL", "debug");
        }

        let config = AppConfig::load("nonexistent").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "postgres://localhost/dailydrop_test");
        assert_eq!(config.capture.proximity_threshold_meters, 45.5);
        assert_eq!(config.logging.level, "debug");
    }
}
