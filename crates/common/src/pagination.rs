//! Page-based pagination for list pages

use serde::{Deserialize, Deserializer, Serialize};

/// Default number of rows on a list page
pub const DEFAULT_PER_PAGE: i64 = 25;

/// Pagination query parameters for list pages (`?page=N`, 1-based)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
}

/// A page value that is not an integer reads as absent
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page: Some(page) }
    }

    /// Current page, defaulting to 1; anything below 1 is treated as 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        DEFAULT_PER_PAGE
    }

    /// Row offset of the current page
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }

    pub fn limit(&self) -> i64 {
        self.per_page()
    }
}

/// One page of results plus the total row count
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: &Pagination, total: i64) -> Self {
        Self {
            items,
            page: pagination.page(),
            per_page: pagination.per_page(),
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.per_page) < self.total
    }

    pub fn last_page(&self) -> i64 {
        if self.total == 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }
}
