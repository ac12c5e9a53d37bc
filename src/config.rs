//! Server configuration from environment variables.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ENVIRONMENT must be development, staging or production, got '{0}'")]
    UnknownEnvironment(String),

    #[error("HOST is not an IP address: '{0}'")]
    InvalidHost(String),

    #[error("HTTP_PORT is not a port number: '{0}'")]
    InvalidPort(String),

    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        })
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Environment: development | staging | production (env: ENVIRONMENT)
    pub environment: Environment,
    /// Bind address (env: HOST)
    pub host: IpAddr,
    /// Bind port (env: HTTP_PORT)
    pub http_port: u16,
    /// JSON log lines instead of human-readable output (env: LOG_JSON)
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: 5000,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`; unset or empty variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let environment = match get("ENVIRONMENT") {
            Some(v) => v.parse::<Environment>()?,
            None => defaults.environment,
        };
        let host = match get("HOST") {
            Some(v) => v.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(v))?,
            None => defaults.host,
        };
        let http_port = match get("HTTP_PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(v))?,
            None => defaults.http_port,
        };
        let log_json = match get("LOG_JSON") {
            Some(v) => parse_flag("LOG_JSON", v)?,
            None => defaults.log_json,
        };

        Ok(Self {
            environment,
            host,
            http_port,
            log_json,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.environment.is_development() {
            "vbapi=debug,tower_http=debug"
        } else {
            "vbapi=info,tower_http=info"
        }
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "Production"),
            ("HOST", "127.0.0.1"),
            ("HTTP_PORT", "8080"),
            ("LOG_JSON", "true"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert!(config.log_json);
        assert_eq!(config.default_log_filter(), "vbapi=info,tower_http=info");
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[("HTTP_PORT", ""), ("ENVIRONMENT", " ")])).unwrap();
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert_eq!(
            Config::from_lookup(lookup(&[("HTTP_PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("HOST", "localhost")])),
            Err(ConfigError::InvalidHost("localhost".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("ENVIRONMENT", "qa")])),
            Err(ConfigError::UnknownEnvironment("qa".to_string()))
        );
        assert!(matches!(
            Config::from_lookup(lookup(&[("LOG_JSON", "maybe")])),
            Err(ConfigError::InvalidFlag { name: "LOG_JSON", .. })
        ));
    }

    #[test]
    fn test_development_logs_at_debug() {
        assert_eq!(Config::default().default_log_filter(), "vbapi=debug,tower_http=debug");
    }
}
