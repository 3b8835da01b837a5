//! Session routes: login page, identity-provider callback, logout
//!
//! Credentials are checked by the identity provider, which sends the user
//! back to `/login/callback?token=...` with a signed session token.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use sendportal_auth::{clear_session_cookie, session_cookie, AuthBackend, LOGIN_PATH};
use sendportal_common::{Result, Views};

pub const LOGIN_VIEW: &str = "session/login";

/// State for the session routes
#[derive(Clone)]
pub struct SessionState {
    pub auth: AuthBackend,
    pub views: Arc<Views>,
}

impl FromRef<SessionState> for AuthBackend {
    fn from_ref(state: &SessionState) -> Self {
        state.auth.clone()
    }
}

pub fn register_views(views: &mut Views) -> Result<()> {
    views.register(LOGIN_VIEW, include_str!("../views/login.hbs"))
}

pub fn routes() -> Router<SessionState> {
    Router::new()
        .route(LOGIN_PATH, get(login))
        .route("/login/callback", get(callback))
        .route("/logout", post(logout))
}

/// `login_url` is the identity provider's sign-in page, when configured
#[derive(Debug, Serialize)]
struct LoginPage<'a> {
    title: &'static str,
    login_url: Option<&'a str>,
}

async fn login(State(state): State<SessionState>) -> Result<Html<String>> {
    state.views.render(
        LOGIN_VIEW,
        &LoginPage {
            title: "Sign In",
            login_url: state.auth.config().login_url.as_deref(),
        },
    )
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub token: Option<String>,
}

/// Accept a session token from the identity provider and store it in the cookie
async fn callback(
    State(state): State<SessionState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(token) = query.token.filter(|t| !t.is_empty()) else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match state.auth.verify_session(&token).await {
        Ok(ctx) => {
            tracing::info!(user_id = %ctx.user.id, "Session started");
            (
                [(SET_COOKIE, session_cookie(state.auth.config(), &token))],
                Redirect::to(&sendportal_templates::routes::index_path()),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

async fn logout(State(state): State<SessionState>) -> Response {
    (
        [(SET_COOKIE, clear_session_cookie(state.auth.config()))],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
