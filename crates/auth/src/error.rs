//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;

/// Where guests are sent
pub const LOGIN_PATH: &str = "/login";

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingSession,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidUserId,
    UserNotFound,
    UserLoadError,
    MembershipsLoadError,
    SessionIssueFailed,
    /// Authenticated user belongs to no team
    NoCurrentTeam,
}

impl AuthError {
    /// Whether the request should be treated as coming from a guest
    pub fn is_guest(&self) -> bool {
        matches!(
            self,
            AuthError::MissingSession
                | AuthError::InvalidAuthorizationFormat
                | AuthError::InvalidToken
                | AuthError::InvalidUserId
                | AuthError::UserNotFound
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if self.is_guest() {
            tracing::debug!(reason = ?self, "Guest redirected to login");
            return Redirect::to(LOGIN_PATH).into_response();
        }

        let (status, code, message) = match self {
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::MembershipsLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MEMBERSHIPS_LOAD_ERROR",
                "Failed to load user memberships",
            ),
            AuthError::SessionIssueFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SESSION_ERROR",
                "Failed to start session",
            ),
            AuthError::NoCurrentTeam => (
                StatusCode::FORBIDDEN,
                "NO_CURRENT_TEAM",
                "You must belong to a team to continue",
            ),
            _ => (
                StatusCode::UNAUTHORIZED,
                "AUTHENTICATION_ERROR",
                "Authentication required",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
