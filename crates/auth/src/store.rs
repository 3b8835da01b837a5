//! Postgres identity store
//!
//! Uses runtime `sqlx::query_as` (not macros) so the crate builds without a
//! live database.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::IdentityStore;
use crate::error::AuthError;
use crate::types::{AuthIdentity, AuthMembership};

/// Identity lookups against the `users`, `teams` and `team_users` tables
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        sqlx::query_as::<_, AuthIdentity>(
            r#"
            SELECT id, email, name, current_team_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })
    }

    async fn find_memberships(&self, user_id: Uuid) -> Result<Vec<AuthMembership>, AuthError> {
        sqlx::query_as::<_, AuthMembership>(
            r#"
            SELECT t.id AS team_id, t.name AS team_name, tu.role
            FROM teams t
            INNER JOIN team_users tu ON t.id = tu.team_id
            WHERE tu.user_id = $1
            ORDER BY t.name ASC, t.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to load memberships");
            AuthError::MembershipsLoadError
        })
    }
}
