//! Repository implementations for the Templates domain
//!
//! Every operation takes the owning team id; a template of another team is
//! indistinguishable from a missing one.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod templates;

use async_trait::async_trait;
use uuid::Uuid;

use sendportal_common::{Page, Pagination, RepositoryError};

use crate::domain::entities::Template;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryTemplateStore;
pub use templates::PgTemplateStore;

/// Team-scoped template persistence
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// One page of a team's templates, ordered by name
    async fn list_for_team(
        &self,
        team_id: Uuid,
        pagination: &Pagination,
    ) -> Result<Page<Template>, RepositoryError>;

    /// Find a template by ID within a team
    async fn find_for_team(
        &self,
        team_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Template>, RepositoryError>;

    /// Whether another template of the team already uses `name`
    async fn name_taken(
        &self,
        team_id: Uuid,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;

    /// Insert a new template; a duplicate name yields `AlreadyExists`
    async fn create(&self, template: &Template) -> Result<Template, RepositoryError>;

    /// Overwrite name and content; `None` when no such template in the team
    async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<Option<Template>, RepositoryError>;

    /// Delete a template; `false` when no such template in the team
    async fn delete(&self, team_id: Uuid, id: Uuid) -> Result<bool, RepositoryError>;
}
