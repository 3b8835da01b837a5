//! Page view models and view registration for templates

use serde::Serialize;
use uuid::Uuid;

use sendportal_auth::{AuthContext, AuthMembership};
use sendportal_common::{FieldErrors, Page, Result, Views};

use super::routes;
use crate::domain::entities::Template;
use crate::domain::form::TemplateForm;

pub const INDEX_VIEW: &str = "templates/index";
pub const CREATE_VIEW: &str = "templates/create";
pub const EDIT_VIEW: &str = "templates/edit";

/// Register the template pages and their shared form partial
pub fn register_views(views: &mut Views) -> Result<()> {
    views.register_partial("template_form", include_str!("../../views/form.hbs"))?;
    views.register(INDEX_VIEW, include_str!("../../views/index.hbs"))?;
    views.register(CREATE_VIEW, include_str!("../../views/create.hbs"))?;
    views.register(EDIT_VIEW, include_str!("../../views/edit.hbs"))?;
    Ok(())
}

/// Values the layout needs on every page
#[derive(Debug, Serialize)]
pub struct LayoutContext {
    pub title: String,
    pub user_email: String,
    pub team_name: String,
}

impl LayoutContext {
    pub fn new(title: &str, auth: &AuthContext, team: &AuthMembership) -> Self {
        Self {
            title: title.to_string(),
            user_email: auth.user.email.clone(),
            team_name: team.team_name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateRow {
    pub id: Uuid,
    pub name: String,
    pub updated_at: String,
    pub edit_url: String,
    pub destroy_url: String,
}

impl From<Template> for TemplateRow {
    fn from(t: Template) -> Self {
        Self {
            edit_url: routes::edit_path(t.id),
            destroy_url: routes::member_path(t.id),
            updated_at: t.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub templates: Vec<TemplateRow>,
    /// The team has templates, even if the current page shows none
    pub has_templates: bool,
    pub total: i64,
    pub create_url: String,
    pub page: i64,
    pub last_page: i64,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

impl IndexPage {
    /// Page links hold only integers, so the view writes them unescaped
    pub fn new(layout: LayoutContext, page: Page<Template>) -> Self {
        let (current, last_page) = (page.page, page.last_page());
        // Past the end, "previous" goes back to the last page with rows
        let previous_url = page.has_previous().then(|| {
            format!(
                "{}?page={}",
                routes::index_path(),
                (current - 1).min(last_page)
            )
        });
        let next_url = page
            .has_next()
            .then(|| format!("{}?page={}", routes::index_path(), current + 1));

        Self {
            layout,
            has_templates: page.total > 0,
            total: page.total,
            templates: page.items.into_iter().map(TemplateRow::from).collect(),
            create_url: routes::create_path(),
            page: current,
            last_page,
            previous_url,
            next_url,
        }
    }
}

/// Create and edit form page; `method` is the spoofed HTTP method, if any
#[derive(Debug, Serialize)]
pub struct FormPage {
    #[serde(flatten)]
    pub layout: LayoutContext,
    pub action: String,
    pub method: Option<&'static str>,
    pub submit_label: &'static str,
    pub cancel_url: String,
    pub old: TemplateForm,
    pub errors: FieldErrors,
    pub has_errors: bool,
}

impl FormPage {
    pub fn create(layout: LayoutContext, old: TemplateForm, errors: FieldErrors) -> Self {
        Self {
            layout,
            action: routes::index_path(),
            method: None,
            submit_label: "Save Template",
            cancel_url: routes::index_path(),
            has_errors: !errors.is_empty(),
            old,
            errors,
        }
    }

    pub fn edit(layout: LayoutContext, id: Uuid, old: TemplateForm, errors: FieldErrors) -> Self {
        Self {
            layout,
            action: routes::member_path(id),
            method: Some("PUT"),
            submit_label: "Update Template",
            cancel_url: routes::index_path(),
            has_errors: !errors.is_empty(),
            old,
            errors,
        }
    }
}
