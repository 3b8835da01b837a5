//! Session token validation, issuance, and extraction helpers

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Validate a session token against the configured secret, issuer and audience
pub(crate) fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    // Configured claims must be present, not merely correct when present
    let mut required = vec!["exp"];
    if config.audience.is_some() {
        required.push("aud");
    }
    if config.issuer.is_some() {
        required.push("iss");
    }
    validation.set_required_spec_claims(&required);

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Sign a session token for a user.
///
/// Tokens are normally minted by the identity provider; this is used by
/// local tooling and the test suite.
pub fn issue_session_token(
    config: &AuthConfig,
    user_id: Uuid,
    email: Option<&str>,
    ttl: chrono::Duration,
) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        iat: now.max(0) as u64,
        exp: (now + ttl.num_seconds()).max(0) as u64,
        aud: config.audience.clone(),
        iss: config.issuer.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign session token");
        AuthError::SessionIssueFailed
    })
}

/// `Set-Cookie` value that stores a session token
pub fn session_cookie(config: &AuthConfig, token: &str) -> String {
    format!(
        "{}={}; {}",
        config.session_cookie,
        token,
        cookie_attributes(config)
    )
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_session_cookie(config: &AuthConfig) -> String {
    format!(
        "{}=; {}; Max-Age=0",
        config.session_cookie,
        cookie_attributes(config)
    )
}

fn cookie_attributes(config: &AuthConfig) -> &'static str {
    if config.secure_cookies {
        "Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    }
}

/// Find the session token in the request: cookie first, then bearer header
pub(crate) fn extract_session_token(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    if let Some(token) = extract_session_cookie(headers, &config.session_cookie) {
        return Ok(token);
    }

    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingSession)?;

    extract_bearer_token(auth_header)
}

/// Extract a named cookie value from all `Cookie` headers
pub(crate) fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
