//! Server configuration loaded from environment variables.
//!
//! Only the listening address is configurable. The customer record is always
//! read from its fixed location.

use std::env;
use std::num::ParseIntError;
use thiserror::Error;

pub const DEFAULT_APP_HOST: &str = "0.0.0.0";
pub const DEFAULT_APP_PORT: u16 = 8080;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables, reading `.env` first if present.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST`: Server host (optional, default: "0.0.0.0")
    /// - `APP_PORT`: Server port (optional, default: 8080)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let app_host = get_optional_env("APP_HOST", DEFAULT_APP_HOST.to_string());
        let app_port = get_optional_env_parsed("APP_PORT", DEFAULT_APP_PORT)?;

        Ok(Self { app_host, app_port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_APP_HOST.to_string(),
            app_port: DEFAULT_APP_PORT,
        }
    }
}

fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
    }

    #[rstest]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[rstest]
    #[serial]
    fn test_reads_host_and_port() {
        clear_env();
        env::set_var("APP_HOST", "127.0.0.1");
        env::set_var("APP_PORT", "9090");

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.app_host, "127.0.0.1");
        assert_eq!(config.app_port, 9090);
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }

    #[rstest]
    #[case("not-a-port")]
    #[case("70000")]
    #[case("-1")]
    #[serial]
    fn test_invalid_port(#[case] value: &str) {
        clear_env();
        env::set_var("APP_PORT", value);

        let result = AppConfig::from_env();
        clear_env();

        match result {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "APP_PORT"),
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidValue {
            key: "APP_PORT".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for APP_PORT: invalid digit found in string"
        );
    }
}
