//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads an optional `.env` file first.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `3000` |
//! | `BIND_ADDR` | `0.0.0.0` |
//! | `DATABASE_URL` | unset; overrides the `DB_*` parts when set |
//! | `DB_HOST` / `DB_USER` / `DB_PASSWORD` / `DB_DATABASE` | `localhost` / `root` / empty / `tienda` |
//! | `DB_PORT` | `3307` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | `5` |
//! | `ERROR_DETAIL` | `verbose` (`redacted` hides database messages) |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tienda_db::pool::DEFAULT_DB_PORT;
use tienda_db::DbConfig;

/// How much of a database error reaches the client in `details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorDetail {
    /// The raw database message.
    #[default]
    Verbose,
    /// A fixed placeholder; the raw message is only logged.
    Redacted,
}

impl FromStr for ErrorDetail {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(ErrorDetail::Verbose),
            "redacted" => Ok(ErrorDetail::Redacted),
            _ => Err(ConfigError::InvalidValue("ERROR_DETAIL".to_string())),
        }
    }
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// HTTP bind address
    pub bind_addr: String,

    /// Database pool configuration
    pub database: DbConfig,

    /// Exposure of database error text
    pub error_detail: ErrorDetail,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => DbConfig::from_url(url),
            None => DbConfig::new(
                var("DB_HOST", "localhost"),
                var("DB_USER", "root"),
                var("DB_DATABASE", "tienda"),
            )
            .password(var("DB_PASSWORD", ""))
            .port(parse("DB_PORT", &var("DB_PORT", &DEFAULT_DB_PORT.to_string()))?),
        };

        let database = database
            .max_connections(parse_nonzero(
                "DB_MAX_CONNECTIONS",
                &var("DB_MAX_CONNECTIONS", "10"),
            )?)
            .acquire_timeout(Duration::from_secs(parse_nonzero(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &var("DB_ACQUIRE_TIMEOUT_SECS", "5"),
            )?));

        Ok(ApiConfig {
            port: parse("PORT", &var("PORT", "3000"))?,
            bind_addr: var("BIND_ADDR", "0.0.0.0"),
            database,
            error_detail: var("ERROR_DETAIL", "verbose").parse()?,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key.to_string()))
}

/// Like [`parse`], but zero is rejected too.
fn parse_nonzero<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    let parsed: T = parse(key, value)?;
    if parsed == T::default() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(parsed)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
