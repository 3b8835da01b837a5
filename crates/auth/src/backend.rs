//! Authentication backend
//!
//! Couples the session token configuration with an `IdentityStore` that
//! resolves users and their team memberships.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::store::PgIdentityStore;
use crate::types::{AuthIdentity, AuthMembership};

/// Read access to users and team memberships
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Find user identity by ID
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError>;

    /// Memberships for a user, ordered by team name
    async fn find_memberships(&self, user_id: Uuid) -> Result<Vec<AuthMembership>, AuthError>;
}

/// Authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    store: Arc<dyn IdentityStore>,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(store: Arc<dyn IdentityStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Backend reading identities from Postgres
    pub fn postgres(pool: PgPool, config: AuthConfig) -> Self {
        Self::new(Arc::new(PgIdentityStore::new(pool)), config)
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve a session token into an authenticated context
    pub async fn verify_session(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_session_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let user = self.store.find_user(user_id).await?.ok_or_else(|| {
            tracing::debug!(user_id = %user_id, "Session refers to unknown user");
            AuthError::UserNotFound
        })?;

        let memberships = self.store.find_memberships(user_id).await?;

        Ok(AuthContext::new(user, memberships))
    }
}
