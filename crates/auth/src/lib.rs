//! Session authentication for Sendportal
//!
//! Validates signed session tokens (cookie or bearer header), resolves the
//! user's identity and team memberships through an `IdentityStore`, and
//! provides axum extractors that work with any domain state implementing
//! `FromRef<S>` for `AuthBackend`. Guests are redirected to the login page.

mod backend;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod store;
mod types;

pub use backend::{AuthBackend, IdentityStore};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::{AuthError, LOGIN_PATH};
pub use extractors::{AuthUser, TeamUser};
pub use jwt::{clear_session_cookie, issue_session_token, session_cookie, SessionClaims};
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryIdentityStore;
pub use store::PgIdentityStore;
pub use types::{AuthIdentity, AuthMembership, AuthRole};
