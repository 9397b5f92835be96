//! Database connection settings for the roster
//!
//! Settings are resolved from, in increasing precedence: built-in
//! defaults, an optional TOML file, and the process environment
//! (after loading the nearest `.env` file).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::num::ParseIntError;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Environment variable names
pub mod vars {
    pub const HOST: &str = "DB_HOST";
    pub const PORT: &str = "DB_PORT";
    pub const USER: &str = "DB_USER";
    pub const NAME: &str = "DB_NAME";
    pub const PASSWORD: &str = "DB_PASSWORD";
    pub const CONFIG_PATH: &str = "ROSTER_CONFIG";
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DB_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// `[database]` table of the config file; every key is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub database: Option<DatabaseSection>,
}

impl FileConfig {
    /// Load from ROSTER_CONFIG (or `roster.toml`) if present, else empty
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(vars::CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        let cfg = toml::from_str::<FileConfig>(&s)?;
        debug!("Loaded config file {}", path.display());
        Ok(cfg)
    }
}

/// Everything needed to open one database connection.
///
/// User, database and password are left to the driver when unset: a
/// trust/peer setup needs no password, and a missing user or database
/// surfaces as a connection failure.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub database: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("database", &self.database)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl DbConfig {
    /// Load `.env`, the optional config file, then the environment
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        let file = FileConfig::load()?;
        Self::resolve(&file, |key| std::env::var(key).ok())
    }

    /// Merge file values with `lookup` (environment wins) and apply defaults
    pub fn resolve<F>(file: &FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset, as libpq treats them
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let section = file.database.clone().unwrap_or_default();

        let host = lookup(vars::HOST)
            .or(section.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(vars::PORT) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => section.port.unwrap_or(DEFAULT_PORT),
        };

        let user = lookup(vars::USER).or(section.user);
        let database = lookup(vars::NAME).or(section.name);
        let password = lookup(vars::PASSWORD).or(section.password);

        Ok(Self {
            host,
            port,
            user,
            database,
            password,
        })
    }
}

/// Load the nearest `.env` file, replacing variables that are already set
pub fn load_dotenv() {
    match dotenvy::dotenv_override() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }
}
