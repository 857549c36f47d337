//! Configuration module
//!
//! Environment-based configuration for the API server. `Config::from_env` loads a
//! `.env` file when present (development convenience) and reads every setting from
//! the process environment, falling back to defaults where a default is safe.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,

    // Database
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,

    // Upload storage
    pub upload_dir: String,
    pub max_upload_size_bytes: usize,

    // Auth
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // Printing subsystem
    pub printing_enabled: bool,
    pub cups_host: Option<String>,
    pub lpstat_path: String,
    pub lpoptions_path: String,
    pub lp_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = env_or("ENVIRONMENT", "development");

        let database_url = env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is required")?;

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                if is_production_env(&environment) {
                    bail!("JWT_SECRET environment variable is required in production");
                }
                "printdock-dev-secret".to_string()
            }
        };

        let cors_origins = env_or("CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment,
            cors_origins,
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS)?,
            upload_dir: env_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
            max_upload_size_bytes: env_parse(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            )?,
            jwt_secret,
            jwt_expiry_hours: env_parse("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            printing_enabled: env_parse("PRINTING_ENABLED", true)?,
            cups_host: env::var("CUPS_HOST").ok().filter(|s| !s.is_empty()),
            lpstat_path: env_or("LPSTAT_PATH", "lpstat"),
            lpoptions_path: env_or("LPOPTIONS_PATH", "lpoptions"),
            lp_path: env_or("LP_PATH", "lp"),
        })
    }

    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
