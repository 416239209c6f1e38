//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (e.g. `sqlite://data/links.db`)
//! - `DATABASE_DIR` - directory for the default database file, used when
//!   `DATABASE_URL` is not set (default: `.`; the directory is created if
//!   missing and the file becomes `<dir>/url_shortener.db`)
//! - `BASE_URL` - public base for generated short URLs
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - connection pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Name of the database file when derived from `DATABASE_DIR`.
const DEFAULT_DATABASE_FILE: &str = "url_shortener.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the default database directory cannot be created.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
        })
    }

    /// Loads the database URL with fallback to a directory-based default.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://<DATABASE_DIR>/url_shortener.db`, creating the directory
    ///    when it does not exist
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let dir = PathBuf::from(env::var("DATABASE_DIR").unwrap_or_else(|_| ".".to_string()));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;

        Ok(format!(
            "sqlite://{}",
            dir.join(DEFAULT_DATABASE_FILE).display()
        ))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not an SQLite connection string
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
