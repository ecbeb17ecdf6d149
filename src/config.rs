//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the form is shown.
//!
//! ## Authentication Backends
//!
//! ### Simulated (default)
//!
//! ```bash
//! export AUTH_MODE="simulated"
//! export AUTH_DELAY_MS="2000"
//! ```
//!
//! Any credentials are accepted after `AUTH_DELAY_MS` milliseconds.
//!
//! ### Static user table
//!
//! ```bash
//! export AUTH_MODE="static"
//! export AUTH_SIGNING_SECRET="change-me"
//! export AUTH_USERS="mario@rossi.it:password1,anna@bianchi.it:segreto99"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::Authenticator;
use crate::infrastructure::auth::{SimulatedAuthenticator, StaticAuthenticator};

/// Upper bound for `AUTH_DELAY_MS`.
const MAX_AUTH_DELAY_MS: u64 = 60_000;

/// Which authentication backend the form talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Simulated,
    Static,
}

impl AuthMode {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "simulated" => Ok(AuthMode::Simulated),
            "static" => Ok(AuthMode::Static),
            other => anyhow::bail!("AUTH_MODE must be 'simulated' or 'static', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub auth_mode: AuthMode,
    /// Latency of the simulated backend in milliseconds (`AUTH_DELAY_MS`, default: 2000).
    pub auth_delay_ms: u64,
    /// `(email, password)` pairs parsed from `AUTH_USERS`. Used in static mode only.
    pub auth_users: Vec<(String, String)>,
    /// HMAC key for stored password digests (`AUTH_SIGNING_SECRET`).
    /// Required in static mode.
    pub auth_signing_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            auth_mode: AuthMode::Simulated,
            auth_delay_ms: 2000,
            auth_users: Vec::new(),
            auth_signing_secret: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_MODE`, `AUTH_DELAY_MS`, or `AUTH_USERS` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let auth_mode = match env::var("AUTH_MODE") {
            Ok(v) => AuthMode::parse(&v)?,
            Err(_) => AuthMode::Simulated,
        };

        let auth_delay_ms = match env::var("AUTH_DELAY_MS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("AUTH_DELAY_MS must be a number, got '{}'", v))?,
            Err(_) => 2000,
        };

        let auth_users = match env::var("AUTH_USERS") {
            Ok(v) => parse_users(&v).context("Failed to parse AUTH_USERS")?,
            Err(_) => Vec::new(),
        };

        let auth_signing_secret = env::var("AUTH_SIGNING_SECRET").ok();

        Ok(Self {
            log_level,
            log_format,
            auth_mode,
            auth_delay_ms,
            auth_users,
            auth_signing_secret,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `auth_delay_ms` exceeds 60000
    /// - static mode is selected without a signing secret or without users
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.auth_delay_ms > MAX_AUTH_DELAY_MS {
            anyhow::bail!(
                "AUTH_DELAY_MS is too large (max: {}), got {}",
                MAX_AUTH_DELAY_MS,
                self.auth_delay_ms
            );
        }

        if self.auth_mode == AuthMode::Static {
            if self
                .auth_signing_secret
                .as_deref()
                .is_none_or(|s| s.is_empty())
            {
                anyhow::bail!("AUTH_SIGNING_SECRET must be set and non-empty in static mode");
            }

            if self.auth_users.is_empty() {
                anyhow::bail!("AUTH_USERS must list at least one user in static mode");
            }
        }

        Ok(())
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// Builds the authenticator selected by `auth_mode`.
    pub fn build_authenticator(&self) -> Arc<dyn Authenticator> {
        match self.auth_mode {
            AuthMode::Simulated => Arc::new(SimulatedAuthenticator::new(self.auth_delay())),
            AuthMode::Static => Arc::new(StaticAuthenticator::with_users(
                self.auth_signing_secret.clone().unwrap_or_default(),
                self.auth_users.iter().map(|(e, p)| (e.as_str(), p.as_str())),
            )),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match self.auth_mode {
            AuthMode::Simulated => {
                tracing::info!("  Auth: simulated ({} ms delay)", self.auth_delay_ms)
            }
            AuthMode::Static => {
                tracing::info!("  Auth: static ({} users)", self.auth_users.len())
            }
        }
    }
}

/// Parses `email:password` pairs separated by commas.
///
/// The password is everything after the first `:`, so it may itself contain colons.
fn parse_users(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (email, password) = entry
                .split_once(':')
                .with_context(|| format!("Expected 'email:password', got '{}'", entry))?;

            if email.trim().is_empty() || password.is_empty() {
                anyhow::bail!("Email and password must not be empty in '{}'", email);
            }

            Ok((email.trim().to_string(), password.to_string()))
        })
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
