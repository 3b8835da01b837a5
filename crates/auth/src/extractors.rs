//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::extract_session_token;
use crate::types::AuthMembership;

/// Authenticated user extractor (session cookie or bearer token).
///
/// Guests are rejected with a redirect to the login page.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let token = extract_session_token(&parts.headers, backend.config())?;
        let auth_context = backend.verify_session(&token).await?;

        Ok(AuthUser(auth_context))
    }
}

/// Authenticated user together with their current team.
///
/// Like `AuthUser` but rejects users without a team with 403 FORBIDDEN.
/// Use this for every team-scoped resource.
#[derive(Debug)]
pub struct TeamUser {
    pub auth: AuthContext,
    pub team: AuthMembership,
}

impl<S> FromRequestParts<S> for TeamUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(auth) = AuthUser::from_request_parts(parts, state).await?;

        let team = auth.current_team().cloned().ok_or_else(|| {
            tracing::warn!(user_id = %auth.user.id, "User has no current team");
            AuthError::NoCurrentTeam
        })?;

        Ok(TeamUser { auth, team })
    }
}
