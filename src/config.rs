//! Configuration management for the task API.
//!
//! Configuration is read once at process start from environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `CORS_ORIGIN` - Optional. Allowed CORS origin. Defaults to `*`.
//! - `LOG_LEVEL` - Optional. Default log level when `RUST_LOG` is unset. Defaults to `info`.
//! - `APP_ENV` - Optional. Environment name (`development`/`production`). Defaults to `development`.
//! - `API_NAME` - Optional. Service name reported by the health check.
//! - `API_VERSION` - Optional. Version reported by the health check. Defaults to the crate version.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allowed CORS origin (`*` means any)
    pub cors_origin: String,

    /// Fallback log level when `RUST_LOG` is not set
    pub log_level: String,

    /// Environment name, e.g. `development` or `production`
    pub environment: String,

    /// Service name reported by the health check
    pub api_name: String,

    /// Service version reported by the health check
    pub api_version: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let api_name =
            std::env::var("API_NAME").unwrap_or_else(|_| "Task Management API".to_string());

        let api_version =
            std::env::var("API_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        Ok(Self {
            host,
            port,
            cors_origin,
            log_level,
            environment,
            api_name,
            api_version,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Default configuration without reading the environment (useful for testing).
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origin: "*".to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
            api_name: "Task Management API".to_string(),
            api_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is shared between tests; serialize access.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "HOST",
            "PORT",
            "CORS_ORIGIN",
            "LOG_LEVEL",
            "APP_ENV",
            "API_NAME",
            "API_VERSION",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env().expect("defaults load");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.environment, "development");
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("CORS_ORIGIN", "https://tasks.example.com");

        let config = Config::from_env().expect("config loads");
        assert_eq!(config.port, 8080);
        assert!(config.is_production());
        assert_eq!(config.cors_origin, "https://tasks.example.com");

        clear_env();
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key, _) if key == "PORT"));

        clear_env();
    }
}
