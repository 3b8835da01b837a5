//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthMembership};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
    /// Memberships ordered by team name
    pub memberships: Vec<AuthMembership>,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity, memberships: Vec<AuthMembership>) -> Self {
        Self { user, memberships }
    }

    /// Team the user is currently working in.
    ///
    /// The user's selected `current_team_id` wins when they still belong to
    /// that team; otherwise the first membership is used. `None` when the
    /// user belongs to no team.
    pub fn current_team(&self) -> Option<&AuthMembership> {
        self.user
            .current_team_id
            .and_then(|team_id| self.memberships.iter().find(|m| m.team_id == team_id))
            .or_else(|| self.memberships.first())
    }
}
