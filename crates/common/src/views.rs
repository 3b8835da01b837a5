//! Server-rendered views
//!
//! A thin wrapper around a `Handlebars` registry. The registry owns the shared
//! `layout` partial; domains register their own pages at startup and render
//! them by name. HTML escaping is left on for every `{{value}}` expression.

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Error, Result};

const LAYOUT: &str = include_str!("../views/layout.hbs");

/// Compiled view registry shared by all handlers
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Create a registry with the shared layout partial registered
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_partial("layout", LAYOUT)
            .map_err(|e| Error::Internal(format!("Invalid layout view: {}", e)))?;

        Ok(Self { registry })
    }

    /// Register a named page template
    pub fn register(&mut self, name: &str, source: &str) -> Result<()> {
        self.registry
            .register_template_string(name, source)
            .map_err(|e| Error::Internal(format!("Invalid view {}: {}", name, e)))
    }

    /// Register a named partial that pages can include
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<()> {
        self.registry
            .register_partial(name, source)
            .map_err(|e| Error::Internal(format!("Invalid partial {}: {}", name, e)))
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Render a registered page into an HTML response body
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>> {
        self.registry.render(name, data).map(Html).map_err(|e| {
            tracing::error!(view = %name, error = %e, "Failed to render view");
            Error::Internal(format!("Failed to render view {}", name))
        })
    }
}
