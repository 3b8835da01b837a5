//! Authentication configuration

use sendportal_common::config::{Config, DEFAULT_SESSION_COOKIE};

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Name of the cookie carrying the session token
    pub session_cookie: String,
    /// Add the `Secure` attribute to the session cookie
    pub secure_cookies: bool,
    /// Identity provider sign-in page
    pub login_url: Option<String>,
}

impl AuthConfig {
    /// Config with the default cookie name and no issuer/audience checks
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: None,
            audience: None,
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            secure_cookies: false,
            login_url: None,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            session_cookie: config.session_cookie.clone(),
            secure_cookies: config.secure_cookies,
            login_url: config.login_url.clone(),
        }
    }
}
