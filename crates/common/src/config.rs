//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Cookie that carries the signed session token
pub const DEFAULT_SESSION_COOKIE: &str = "sendportal_session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Session token signing
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub session_cookie: String,
    /// Mark the session cookie `Secure`; disable for plain-HTTP local development
    pub secure_cookies: bool,
    /// Identity provider sign-in page; it sends users back to `/login/callback`
    pub login_url: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: LogFormat,
    pub port: u16,
    pub run_migrations: bool,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
                .unwrap_or(default)
        };

        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required", key))
        };

        let config = Self {
            database_url: required("DATABASE_URL")?,

            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: lookup("JWT_ISSUER").filter(|v| !v.is_empty()),
            jwt_audience: lookup("JWT_AUDIENCE").filter(|v| !v.is_empty()),
            session_cookie: lookup("SESSION_COOKIE")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            secure_cookies: flag("SESSION_SECURE", true),
            login_url: lookup("LOGIN_URL").filter(|v| !v.is_empty()),

            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "sendportal=debug,tower_http=info".to_string()),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            run_migrations: flag("RUN_MIGRATIONS", true),
        };

        Ok(config)
    }
}
