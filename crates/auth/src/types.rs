//! Identity read-model types
//!
//! Lightweight views of the user and team rows owned by the wider platform.
//! These types carry only the fields needed for authentication and tenant
//! scoping.

use serde::Serialize;
use uuid::Uuid;

/// Lightweight identity for authenticated users.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    /// Team the user last switched to, if any
    pub current_team_id: Option<Uuid>,
}

/// Team membership info for tenant scoping
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthMembership {
    pub team_id: Uuid,
    pub team_name: String,
    pub role: AuthRole,
}

/// Membership role within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize)]
#[sqlx(type_name = "team_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthRole {
    Owner,
    Member,
}
