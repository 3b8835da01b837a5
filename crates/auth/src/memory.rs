//! In-memory identity store for tests and local tooling

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::IdentityStore;
use crate::error::AuthError;
use crate::types::{AuthIdentity, AuthMembership, AuthRole};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, AuthIdentity>,
    /// (user_id, membership)
    memberships: Vec<(Uuid, AuthMembership)>,
}

/// Identity store backed by process memory
#[derive(Default)]
pub struct MemoryIdentityStore {
    inner: RwLock<Inner>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with no team
    pub async fn create_user(&self, email: &str) -> AuthIdentity {
        let user = AuthIdentity {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: None,
            current_team_id: None,
        };
        self.inner
            .write()
            .await
            .users
            .insert(user.id, user.clone());
        user
    }

    /// Create a team with the user as a member and make it their current team
    pub async fn create_team(&self, user_id: Uuid, team_name: &str, role: AuthRole) -> Uuid {
        let team_id = Uuid::new_v4();
        self.add_membership(user_id, team_id, team_name, role).await;
        self.switch_team(user_id, team_id).await;
        team_id
    }

    /// Add the user to an existing team
    pub async fn add_membership(&self, user_id: Uuid, team_id: Uuid, team_name: &str, role: AuthRole) {
        self.inner.write().await.memberships.push((
            user_id,
            AuthMembership {
                team_id,
                team_name: team_name.to_string(),
                role,
            },
        ));
    }

    pub async fn switch_team(&self, user_id: Uuid, team_id: Uuid) {
        if let Some(user) = self.inner.write().await.users.get_mut(&user_id) {
            user.current_team_id = Some(team_id);
        }
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_memberships(&self, user_id: Uuid) -> Result<Vec<AuthMembership>, AuthError> {
        let inner = self.inner.read().await;
        let mut memberships: Vec<AuthMembership> = inner
            .memberships
            .iter()
            .filter(|(member, _)| *member == user_id)
            .map(|(_, membership)| membership.clone())
            .collect();
        memberships.sort_by(|a, b| a.team_name.cmp(&b.team_name));
        Ok(memberships)
    }
}
