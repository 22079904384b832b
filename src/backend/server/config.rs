/**
 * Server Configuration
 *
 * Loads the runtime configuration of the server from environment variables.
 *
 * # Configuration Sources
 *
 * | Variable                   | Default                 |
 * |----------------------------|-------------------------|
 * | `DATABASE_URL`             | `sqlite:postboard.db`   |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                     |
 * | `JWT_SECRET`               | required                |
 * | `TOKEN_TTL_HOURS`          | `24`                    |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`  |
 * | `SERVER_HOST`              | `0.0.0.0`               |
 * | `SERVER_PORT`              | `8080`                  |
 *
 * # Error Handling
 *
 * Unlike optional services, a missing signing secret or an unparseable value
 * is fatal: the server refuses to start.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::Duration;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:postboard.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
pub const DEFAULT_PORT: u16 = 8080;

/// Ten years; keeps `iat + ttl` well inside chrono's range
pub const MAX_TOKEN_TTL_HOURS: i64 = 10 * 365 * 24;

/// Lowest and highest cost accepted by bcrypt
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Runtime configuration of the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// The binary reads `.env` into the environment before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DATABASE_MAX_CONNECTIONS", &value)?);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(value) = lookup("TOKEN_TTL_HOURS") {
            let hours: i64 = parse_value("TOKEN_TTL_HOURS", &value)?;
            let ttl = Duration::try_hours(hours).ok_or_else(|| ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                message: format!("{hours} hours is out of range"),
            })?;
            builder = builder.token_ttl(ttl);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &value)?);
        }

        let host = match lookup("SERVER_HOST") {
            Some(value) => parse_value::<IpAddr>("SERVER_HOST", &value)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("SERVER_PORT") {
            Some(value) => parse_value::<u16>("SERVER_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        builder.bind_addr(SocketAddr::new(host, port)).build()
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: format!("{value:?}: {e}"),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    max_connections: Option<u32>,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    bind_addr: Option<SocketAddr>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let max_connections = self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        let token_ttl = self.token_ttl.unwrap_or_else(|| Duration::hours(DEFAULT_TOKEN_TTL_HOURS));
        if token_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                message: "must be positive".to_string(),
            });
        }
        if token_ttl > Duration::hours(MAX_TOKEN_TTL_HOURS) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                message: format!("must be at most {MAX_TOKEN_TTL_HOURS}"),
            });
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("{bcrypt_cost} is outside 4..=31"),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections,
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            bind_addr: self
                .bind_addr
                .unwrap_or_else(|| SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
