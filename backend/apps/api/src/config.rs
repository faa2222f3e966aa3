//! Process Configuration
//!
//! Everything comes from the environment (a `.env` file is loaded first by
//! `main`). Only `DATABASE_URL` is always required; `JWT_SECRET` is
//! required in release builds.

use std::env;
use std::str::FromStr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::password::{DEFAULT_COST, MAX_COST, MIN_COST};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Require TLS to the database (certificates are not verified)
    pub database_ssl: bool,
    pub jwt_secret: Option<String>,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let database_ssl = match lookup("DATABASE_SSL") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("DATABASE_SSL: expected true/false, got {:?}", value))?,
            None => true,
        };

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", DEFAULT_COST)?;
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {} and {} (got {})",
                MIN_COST,
                MAX_COST,
                bcrypt_cost
            );
        }

        Ok(Self {
            database_url,
            database_max_connections,
            database_ssl,
            jwt_secret: lookup("JWT_SECRET").filter(|s| !s.is_empty()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            bcrypt_cost,
        })
    }

    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&self.database_url)
            .context("DATABASE_URL is not a valid Postgres connection string")?;

        if self.database_ssl {
            Ok(options.ssl_mode(PgSslMode::Require))
        } else {
            Ok(options)
        }
    }

    /// Auth settings; without `JWT_SECRET` only a development build may
    /// fall back to a per-process random secret
    pub fn auth_config(&self, allow_development_secret: bool) -> anyhow::Result<AuthConfig> {
        let base = match &self.jwt_secret {
            Some(secret) => AuthConfig::new(secret.as_bytes()),
            None if allow_development_secret => {
                tracing::warn!(
                    "JWT_SECRET is not set, using a random development secret; \
                     tokens will not survive a restart"
                );
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        Ok(AuthConfig {
            bcrypt_cost: self.bcrypt_cost,
            ..base
        })
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_ssl", &self.database_ssl)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{}: invalid value {:?}", key, value)),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "require" => Some(true),
        "0" | "false" | "no" | "off" | "disable" => Some(false),
        _ => None,
    }
}
