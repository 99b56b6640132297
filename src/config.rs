//! Runtime configuration, read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::errors::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://transit.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Sea-ORM connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Interface to bind (`HOST`)
    pub host: IpAddr,
    /// Port to listen on (`PORT`)
    pub port: u16,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Apply pending migrations at startup (`RUN_MIGRATIONS`)
    pub run_migrations: bool,
    /// Allow cross-origin requests from anywhere (`CORS_ALLOW_ANY`)
    pub cors_allow_any: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            run_migrations: true,
            cors_allow_any: true,
        }
    }
}

impl AppConfig {
    /// Read the process environment, after loading `.env` if one exists.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, AppError> {
        // .env is optional
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            host: parse_var(&get, "HOST")?.unwrap_or(defaults.host),
            port: parse_var(&get, "PORT")?.unwrap_or(defaults.port),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            run_migrations: parse_bool(&get, "RUN_MIGRATIONS")?
                .unwrap_or(defaults.run_migrations),
            cors_allow_any: parse_bool(&get, "CORS_ALLOW_ANY")?
                .unwrap_or(defaults.cors_allow_any),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(get: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|err| AppError::Config(format!("{key}={raw}: {err}")))
        })
        .transpose()
}

fn parse_bool<F>(get: &F, key: &str) -> Result<Option<bool>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::Config(format!("{key}={raw}: expected a boolean"))),
        })
        .transpose()
}
