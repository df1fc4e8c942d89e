//! Environment-driven configuration.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::config::ConfigError;

/// SQLite file next to the working directory, created if missing.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://carregamentos.db?mode=rwc";
/// Loopback on port 5000.
pub const DEFAULT_BIND_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000);
/// Functional code of the employee created on first startup.
pub const DEFAULT_SEED_EMPLOYEE_CODE: &str = "125039";
/// Well-known password of the seeded employee, a warning is logged while it is in use.
pub const DEFAULT_SEED_EMPLOYEE_PASSWORD: &str = "125039";
/// Sliding session expiry.
pub const DEFAULT_SESSION_INACTIVITY_MINUTES: i64 = 60;

/// Server configuration read from the environment.
pub struct Config {
    /// SeaORM connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Listen address (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
    /// Sessions are kept in memory when unset
    pub valkey_url: Option<String>,
    /// Functional code of the seeded employee (`SEED_EMPLOYEE_CODE`)
    pub seed_employee_code: String,
    /// Password of the seeded employee (`SEED_EMPLOYEE_PASSWORD`)
    pub seed_employee_password: String,
    /// Minutes of inactivity before a session expires (`SESSION_INACTIVITY_MINUTES`)
    pub session_inactivity_minutes: i64,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable source, unset or empty variables take their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let session_inactivity_minutes: i64 = parse_or(
            "SESSION_INACTIVITY_MINUTES",
            get("SESSION_INACTIVITY_MINUTES"),
            DEFAULT_SESSION_INACTIVITY_MINUTES,
        )?;
        if session_inactivity_minutes <= 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_INACTIVITY_MINUTES".to_string(),
                reason: "must be a positive number of minutes".to_string(),
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: parse_or(
                "BIND_ADDRESS",
                get("BIND_ADDRESS"),
                DEFAULT_BIND_ADDRESS,
            )?,
            valkey_url: get("VALKEY_URL"),
            // Login trims the submitted code, so the seeded one must match
            seed_employee_code: get("SEED_EMPLOYEE_CODE")
                .map(|code| code.trim().to_string())
                .unwrap_or_else(|| DEFAULT_SEED_EMPLOYEE_CODE.to_string()),
            seed_employee_password: get("SEED_EMPLOYEE_PASSWORD")
                .unwrap_or_else(|| DEFAULT_SEED_EMPLOYEE_PASSWORD.to_string()),
            session_inactivity_minutes,
        })
    }

    /// Whether the seeded employee keeps the well-known default password
    pub fn uses_default_credentials(&self) -> bool {
        self.seed_employee_password == DEFAULT_SEED_EMPLOYEE_PASSWORD
    }
}

fn parse_or<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
