//! Database configuration.
//!
//! Built in code with the [`DbConfig`] builder, or loaded from environment
//! variables with fallback to defaults:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BEERSTOCK_DB_PATH` | `./beerstock.db` |
//! | `BEERSTOCK_DB_MAX_CONNECTIONS` | `5` |
//! | `BEERSTOCK_DB_MIN_CONNECTIONS` | `1` |
//! | `BEERSTOCK_DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `BEERSTOCK_DB_RUN_MIGRATIONS` | `true` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default database file when nothing else is configured.
pub const DEFAULT_DATABASE_PATH: &str = "./beerstock.db";

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/beerstock.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let config = DbConfig::in_memory();
    /// let db = Database::new(config).await?;
    /// // Database is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }

    /// Checks whether this points at a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == ":memory:"
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("BEERSTOCK_DB_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let defaults = DbConfig::new(path);

        let config = DbConfig {
            max_connections: parse_var(
                &lookup,
                "BEERSTOCK_DB_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
            min_connections: parse_var(
                &lookup,
                "BEERSTOCK_DB_MIN_CONNECTIONS",
                defaults.min_connections,
            )?,
            connect_timeout: Duration::from_secs(parse_var(
                &lookup,
                "BEERSTOCK_DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            run_migrations: parse_var(
                &lookup,
                "BEERSTOCK_DB_RUN_MIGRATIONS",
                defaults.run_migrations,
            )?,
            ..defaults
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "BEERSTOCK_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        if config.min_connections > config.max_connections {
            return Err(ConfigError::InvalidValue(
                "BEERSTOCK_DB_MIN_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new(DEFAULT_DATABASE_PATH)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = DbConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_environment_overrides() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("BEERSTOCK_DB_PATH", "/var/lib/beerstock/stock.db"),
            ("BEERSTOCK_DB_MAX_CONNECTIONS", "8"),
            ("BEERSTOCK_DB_CONNECT_TIMEOUT_SECS", " 5 "),
            ("BEERSTOCK_DB_RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/beerstock/stock.db")
        );
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = DbConfig::from_lookup(lookup_from(&[("BEERSTOCK_DB_MAX_CONNECTIONS", "many")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BEERSTOCK_DB_MAX_CONNECTIONS");

        let err = DbConfig::from_lookup(lookup_from(&[
            ("BEERSTOCK_DB_MAX_CONNECTIONS", "2"),
            ("BEERSTOCK_DB_MIN_CONNECTIONS", "3"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "BEERSTOCK_DB_MIN_CONNECTIONS"));
    }
}
