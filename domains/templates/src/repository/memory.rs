//! In-memory template store for tests and local tooling

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use sendportal_common::{Page, Pagination, RepositoryError};

use super::TemplateStore;
use crate::domain::entities::Template;

/// Template store backed by process memory
#[derive(Default)]
pub struct MemoryTemplateStore {
    rows: RwLock<Vec<Template>>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored template, regardless of team
    pub async fn all(&self) -> Vec<Template> {
        self.rows.read().await.clone()
    }

    /// Look up a template by ID, regardless of team
    pub async fn get(&self, id: Uuid) -> Option<Template> {
        self.rows.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list_for_team(
        &self,
        team_id: Uuid,
        pagination: &Pagination,
    ) -> Result<Page<Template>, RepositoryError> {
        let rows = self.rows.read().await;
        let mut templates: Vec<Template> =
            rows.iter().filter(|t| t.team_id == team_id).cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let total = templates.len() as i64;
        let items = templates
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok(Page::new(items, pagination, total))
    }

    async fn find_for_team(
        &self,
        team_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Template>, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|t| t.id == id && t.team_id == team_id)
            .cloned())
    }

    async fn name_taken(
        &self,
        team_id: Uuid,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .any(|t| t.team_id == team_id && t.name == name && Some(t.id) != except))
    }

    async fn create(&self, template: &Template) -> Result<Template, RepositoryError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|t| t.id == template.id || (t.team_id == template.team_id && t.name == template.name))
        {
            return Err(RepositoryError::AlreadyExists);
        }
        rows.push(template.clone());
        Ok(template.clone())
    }

    async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<Option<Template>, RepositoryError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|t| t.team_id == team_id && t.name == name && t.id != id)
        {
            return Err(RepositoryError::AlreadyExists);
        }

        Ok(rows
            .iter_mut()
            .find(|t| t.id == id && t.team_id == team_id)
            .map(|t| {
                t.name = name.to_string();
                t.content = content.to_string();
                t.updated_at = Utc::now();
                t.clone()
            }))
    }

    async fn delete(&self, team_id: Uuid, id: Uuid) -> Result<bool, RepositoryError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| !(t.id == id && t.team_id == team_id));
        Ok(rows.len() < before)
    }
}
