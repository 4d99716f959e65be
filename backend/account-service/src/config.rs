//! Configuration management for Account Service
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! # Example
//!
//! ```no_run
//! use account_service::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     println!("Argon2 iterations: {}", settings.password.iterations);
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use tracing::info;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub password: PasswordSettings,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self> {
        // Load .env file in development
        if cfg!(debug_assertions) && dotenvy::dotenv().is_ok() {
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            database: DatabaseSettings::from_env()?,
            password: PasswordSettings::from_env()?,
        })
    }
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub acquire_timeout: u64,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,
            acquire_timeout: env::var("DATABASE_ACQUIRE_TIMEOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("Invalid DATABASE_ACQUIRE_TIMEOUT")?,
        })
    }
}

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordSettings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            memory_kib: env::var("ARGON2_MEMORY_KIB")
                .unwrap_or_else(|_| defaults.memory_kib.to_string())
                .parse()
                .context("Invalid ARGON2_MEMORY_KIB")?,
            iterations: env::var("ARGON2_ITERATIONS")
                .unwrap_or_else(|_| defaults.iterations.to_string())
                .parse()
                .context("Invalid ARGON2_ITERATIONS")?,
            parallelism: env::var("ARGON2_PARALLELISM")
                .unwrap_or_else(|_| defaults.parallelism.to_string())
                .parse()
                .context("Invalid ARGON2_PARALLELISM")?,
        })
    }
}
