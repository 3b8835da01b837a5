//! Postgres template repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use sendportal_common::{Page, Pagination, RepositoryError};

use super::TemplateStore;
use crate::domain::entities::Template;

#[derive(Clone)]
pub struct PgTemplateStore {
    pool: PgPool,
}

impl PgTemplateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PgTemplateStore {
    async fn list_for_team(
        &self,
        team_id: Uuid,
        pagination: &Pagination,
    ) -> Result<Page<Template>, RepositoryError> {
        let templates = sqlx::query_as::<_, Template>(
            r#"
            SELECT id, team_id, name, content, created_at, updated_at
            FROM templates
            WHERE team_id = $1
            ORDER BY name ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(team_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM templates WHERE team_id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(templates, pagination, total))
    }

    async fn find_for_team(
        &self,
        team_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Template>, RepositoryError> {
        let template = sqlx::query_as::<_, Template>(
            r#"
            SELECT id, team_id, name, content, created_at, updated_at
            FROM templates
            WHERE id = $1 AND team_id = $2
            "#,
        )
        .bind(id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(template)
    }

    async fn name_taken(
        &self,
        team_id: Uuid,
        name: &str,
        except: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM templates
                WHERE team_id = $1 AND name = $2
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(team_id)
        .bind(name)
        .bind(except)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn create(&self, template: &Template) -> Result<Template, RepositoryError> {
        let created = sqlx::query_as::<_, Template>(
            r#"
            INSERT INTO templates (id, team_id, name, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, team_id, name, content, created_at, updated_at
            "#,
        )
        .bind(template.id)
        .bind(template.team_id)
        .bind(&template.name)
        .bind(&template.content)
        .bind(template.created_at)
        .bind(template.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(
        &self,
        team_id: Uuid,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<Option<Template>, RepositoryError> {
        let updated = sqlx::query_as::<_, Template>(
            r#"
            UPDATE templates SET
                name = $3,
                content = $4,
                updated_at = NOW()
            WHERE id = $1 AND team_id = $2
            RETURNING id, team_id, name, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(team_id)
        .bind(name)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, team_id: Uuid, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1 AND team_id = $2")
            .bind(id)
            .bind(team_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
