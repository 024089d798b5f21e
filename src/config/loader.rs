//! Load configuration from environment variables, falling back to fixed defaults.

use crate::config::types::{AppConfig, DatabaseConfig, ServerConfig};
use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const DB_ACQUIRE_TIMEOUT_SECS: &str = "DB_ACQUIRE_TIMEOUT_SECS";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const PRICE_TRENDS_PATH: &str = "PRICE_TRENDS_PATH";

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unset and blank variables take the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let db_defaults = DatabaseConfig::default();
        let server_defaults = ServerConfig::default();

        let database = DatabaseConfig {
            host: get(DB_HOST).unwrap_or(db_defaults.host),
            port: parse_or(DB_PORT, get(DB_PORT), db_defaults.port)?,
            user: get(DB_USER).unwrap_or(db_defaults.user),
            password: get(DB_PASSWORD).unwrap_or(db_defaults.password),
            database: get(DB_NAME).unwrap_or(db_defaults.database),
            max_connections: parse_or(DB_MAX_CONNECTIONS, get(DB_MAX_CONNECTIONS), db_defaults.max_connections)?,
            acquire_timeout: match get(DB_ACQUIRE_TIMEOUT_SECS) {
                Some(raw) => Duration::from_secs(parse_value(DB_ACQUIRE_TIMEOUT_SECS, &raw)?),
                None => db_defaults.acquire_timeout,
            },
        };
        if database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: DB_MAX_CONNECTIONS,
                value: "0".into(),
            });
        }

        let server = ServerConfig {
            host: get(HOST).unwrap_or(server_defaults.host),
            port: parse_or(PORT, get(PORT), server_defaults.port)?,
        };

        Ok(AppConfig {
            database,
            server,
            price_trends_path: get(PRICE_TRENDS_PATH).map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.host, "localhost");
        assert!(config.price_trends_path.is_none());
    }

    #[test]
    fn variables_override_defaults() {
        let config = load(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "advisor"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "fields"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "3"),
            ("PORT", "8080"),
            ("PRICE_TRENDS_PATH", "/etc/prices.json"),
        ])
        .unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.user, "advisor");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.database, "fields");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.price_trends_path, Some(PathBuf::from("/etc/prices.json")));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = load(&[("DB_HOST", "  "), ("PORT", "")]).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "PORT", .. }));
        let err = load(&[("DB_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "DB_PORT", .. }));
    }

    #[test]
    fn zero_connections_is_rejected() {
        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "DB_MAX_CONNECTIONS", .. }));
    }
}
