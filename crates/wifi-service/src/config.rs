//! Wifi service configuration.
//!
//! Configuration is loaded from environment variables. The database URL is
//! redacted in Debug output.

use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default maximum number of pooled database connections.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Default per-statement timeout in seconds.
pub const DEFAULT_DB_QUERY_TIMEOUT_SECONDS: u32 = 5;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default drain period after a shutdown signal, in seconds.
pub const DEFAULT_DRAIN_SECONDS: u64 = 0;

/// Wifi service configuration.
///
/// Database URL is redacted in Debug output to prevent credential leakage.
#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection URL.
    pub database_url: String,

    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum pooled database connections.
    pub db_max_connections: u32,

    /// Postgres `statement_timeout` applied to every connection.
    pub db_query_timeout_seconds: u32,

    /// Upper bound on the time spent serving a single request.
    pub request_timeout_seconds: u64,

    /// How long to keep draining connections after SIGINT/SIGTERM.
    pub drain_seconds: u64,

    /// Apply pending migrations at startup.
    pub run_migrations: bool,
}

/// Custom Debug implementation that redacts sensitive fields.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("bind_address", &self.bind_address)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_query_timeout_seconds", &self.db_query_timeout_seconds)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("drain_seconds", &self.drain_seconds)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid database configuration: {0}")]
    InvalidDatabase(String),

    #[error("Invalid timeout configuration: {0}")]
    InvalidTimeout(String),

    #[error("Invalid flag: {0}")]
    InvalidFlag(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars
            .get("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?
            .clone();

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let db_max_connections = parse_positive(
            vars,
            "DB_MAX_CONNECTIONS",
            DEFAULT_DB_MAX_CONNECTIONS,
            ConfigError::InvalidDatabase,
        )?;

        let db_query_timeout_seconds = parse_positive(
            vars,
            "DB_QUERY_TIMEOUT_SECONDS",
            DEFAULT_DB_QUERY_TIMEOUT_SECONDS,
            ConfigError::InvalidTimeout,
        )?;

        let request_timeout_seconds = parse_positive(
            vars,
            "REQUEST_TIMEOUT_SECONDS",
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
            ConfigError::InvalidTimeout,
        )?;

        // Zero is allowed here: it skips the drain period entirely
        let drain_seconds = match vars.get("DRAIN_SECONDS") {
            Some(value_str) => value_str.parse::<u64>().map_err(|e| {
                ConfigError::InvalidTimeout(format!(
                    "DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?,
            None => DEFAULT_DRAIN_SECONDS,
        };

        let run_migrations = match vars.get("RUN_MIGRATIONS").map(String::as_str) {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                return Err(ConfigError::InvalidFlag(format!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                )))
            }
        };

        Ok(Config {
            database_url,
            bind_address,
            db_max_connections,
            db_query_timeout_seconds,
            request_timeout_seconds,
            drain_seconds,
            run_migrations,
        })
    }
}

/// Parse an optional strictly-positive integer variable.
fn parse_positive<T>(
    vars: &HashMap<String, String>,
    key: &str,
    default: T,
    make_err: fn(String) -> ConfigError,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: fmt::Display,
{
    let Some(value_str) = vars.get(key) else {
        return Ok(default);
    };

    let value: T = value_str.parse().map_err(|e| {
        make_err(format!(
            "{} must be a valid positive integer, got '{}': {}",
            key, value_str, e
        ))
    })?;

    if value == T::default() {
        return Err(make_err(format!("{} must be greater than 0", key)));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base_vars() -> HashMap<String, String> {
        HashMap::from([(
            "DATABASE_URL".to_string(),
            "postgresql://localhost/wifi_test".to_string(),
        )])
    }

    #[test]
    fn test_from_vars_success_with_defaults() {
        let vars = base_vars();

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.database_url, "postgresql://localhost/wifi_test");
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(
            config.db_query_timeout_seconds,
            DEFAULT_DB_QUERY_TIMEOUT_SECONDS
        );
        assert_eq!(
            config.request_timeout_seconds,
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        );
        assert_eq!(config.drain_seconds, DEFAULT_DRAIN_SECONDS);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_from_vars_success_with_custom_values() {
        let mut vars = base_vars();
        vars.insert("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string());
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "4".to_string());
        vars.insert("DB_QUERY_TIMEOUT_SECONDS".to_string(), "2".to_string());
        vars.insert("REQUEST_TIMEOUT_SECONDS".to_string(), "10".to_string());
        vars.insert("DRAIN_SECONDS".to_string(), "15".to_string());
        vars.insert("RUN_MIGRATIONS".to_string(), "false".to_string());

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.db_query_timeout_seconds, 2);
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.drain_seconds, 15);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_from_vars_missing_database_url() {
        let vars = HashMap::new();

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "DATABASE_URL"));
    }

    #[test]
    fn test_db_max_connections_rejects_zero() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "0".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidDatabase(msg)) if msg.contains("must be greater than 0"))
        );
    }

    #[test]
    fn test_db_max_connections_rejects_non_numeric() {
        let mut vars = base_vars();
        vars.insert("DB_MAX_CONNECTIONS".to_string(), "twenty".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidDatabase(msg)) if msg.contains("must be a valid positive integer"))
        );
    }

    #[test]
    fn test_request_timeout_rejects_negative() {
        let mut vars = base_vars();
        vars.insert("REQUEST_TIMEOUT_SECONDS".to_string(), "-1".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidTimeout(msg)) if msg.contains("REQUEST_TIMEOUT_SECONDS"))
        );
    }

    #[test]
    fn test_query_timeout_rejects_zero() {
        let mut vars = base_vars();
        vars.insert("DB_QUERY_TIMEOUT_SECONDS".to_string(), "0".to_string());

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidTimeout(msg)) if msg.contains("must be greater than 0"))
        );
    }

    #[test]
    fn test_drain_seconds_accepts_zero() {
        let mut vars = base_vars();
        vars.insert("DRAIN_SECONDS".to_string(), "0".to_string());

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(config.drain_seconds, 0);
    }

    #[test]
    fn test_run_migrations_rejects_garbage() {
        let mut vars = base_vars();
        vars.insert("RUN_MIGRATIONS".to_string(), "sometimes".to_string());

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidFlag(_))));
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let vars = base_vars();
        let config = Config::from_vars(&vars).expect("Config should load successfully");

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("postgresql://"));
        assert!(!debug_output.contains("wifi_test"));
    }
}
