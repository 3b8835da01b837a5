//! Templates domain: team-scoped message templates

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Template;
pub use domain::form::{TemplateForm, ValidTemplate};

// Re-export repository types
#[cfg(any(test, feature = "test-support"))]
pub use repository::MemoryTemplateStore;
pub use repository::{PgTemplateStore, TemplateStore};

// Re-export API types
pub use api::routes;
pub use api::views::register_views;
pub use api::TemplatesState;
