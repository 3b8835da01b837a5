//! Domain entities for the Templates domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sendportal_common::{Error, Result};

/// Maximum template name length (varchar(255))
pub const MAX_NAME_LENGTH: usize = 255;

/// A named content record used to compose messages, owned by one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Template {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a new template for a team
    pub fn new(team_id: Uuid, name: String, content: String) -> Result<Self> {
        Self::validate_name(&name)?;
        Self::validate_content(&content)?;

        let now = Utc::now();
        Ok(Template {
            id: Uuid::new_v4(),
            team_id,
            name,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation("Template name is required".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Template name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }

    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation("Template content is required".to_string()));
        }
        Ok(())
    }
}
