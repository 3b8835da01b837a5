//! Template resource handlers
//!
//! Every handler runs behind `TeamUser`, so guests never reach the body and
//! all store calls are scoped to the caller's current team.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use sendportal_auth::TeamUser;
use sendportal_common::{Error, FieldErrors, Pagination, RepositoryError, Result};
use uuid::Uuid;

use crate::api::middleware::TemplatesState;
use crate::api::routes;
use crate::api::views::{FormPage, IndexPage, LayoutContext, CREATE_VIEW, EDIT_VIEW, INDEX_VIEW};
use crate::domain::entities::Template;
use crate::domain::form::{TemplateForm, ValidTemplate, NAME_TAKEN};

fn not_found() -> Error {
    Error::NotFound("Template not found".to_string())
}

/// Re-render a form with the submitted values and their errors
fn invalid_form(state: &TemplatesState, view: &str, page: FormPage) -> Result<Response> {
    let html = state.views.render(view, &page)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response())
}

/// List the current team's templates
pub async fn index(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
    Query(pagination): Query<Pagination>,
) -> Result<Html<String>> {
    let page = state
        .templates
        .list_for_team(team.team_id, &pagination)
        .await?;

    let layout = LayoutContext::new("Templates", &auth, &team);
    state.views.render(INDEX_VIEW, &IndexPage::new(layout, page))
}

/// Show the empty create form
pub async fn create(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
) -> Result<Html<String>> {
    let layout = LayoutContext::new("New Template", &auth, &team);
    let page = FormPage::create(layout, TemplateForm::default(), FieldErrors::new());
    state.views.render(CREATE_VIEW, &page)
}

/// Validate and persist a new template for the current team
pub async fn store(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
    Form(form): Form<TemplateForm>,
) -> Result<Response> {
    let old = form.clone().normalized();
    let invalid = |errors: FieldErrors| {
        let layout = LayoutContext::new("New Template", &auth, &team);
        invalid_form(&state, CREATE_VIEW, FormPage::create(layout, old.clone(), errors))
    };

    let ValidTemplate { name, content } = match form.validated() {
        Ok(valid) => valid,
        Err(errors) => return invalid(errors),
    };

    if state.templates.name_taken(team.team_id, &name, None).await? {
        return invalid(name_taken());
    }

    let template = Template::new(team.team_id, name, content)?;
    let created = match state.templates.create(&template).await {
        Ok(created) => created,
        Err(RepositoryError::AlreadyExists) => return invalid(name_taken()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        template_id = %created.id,
        team_id = %created.team_id,
        user_id = %auth.user.id,
        "Template created"
    );

    Ok(Redirect::to(&routes::index_path()).into_response())
}

/// Show the edit form pre-filled with the stored values
pub async fn edit(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>> {
    let template = state
        .templates
        .find_for_team(team.team_id, id)
        .await?
        .ok_or_else(not_found)?;

    let layout = LayoutContext::new("Edit Template", &auth, &team);
    let old = TemplateForm {
        name: Some(template.name),
        content: Some(template.content),
    };
    state.views.render(
        EDIT_VIEW,
        &FormPage::edit(layout, template.id, old, FieldErrors::new()),
    )
}

/// Validate and overwrite name and content of an existing template
pub async fn update(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
    Path(id): Path<Uuid>,
    Form(form): Form<TemplateForm>,
) -> Result<Response> {
    // Unknown or foreign ids are a 404 before any validation runs
    state
        .templates
        .find_for_team(team.team_id, id)
        .await?
        .ok_or_else(not_found)?;

    let old = form.clone().normalized();
    let invalid = |errors: FieldErrors| {
        let layout = LayoutContext::new("Edit Template", &auth, &team);
        invalid_form(&state, EDIT_VIEW, FormPage::edit(layout, id, old.clone(), errors))
    };

    let ValidTemplate { name, content } = match form.validated() {
        Ok(valid) => valid,
        Err(errors) => return invalid(errors),
    };

    if state
        .templates
        .name_taken(team.team_id, &name, Some(id))
        .await?
    {
        return invalid(name_taken());
    }

    let updated = match state
        .templates
        .update(team.team_id, id, &name, &content)
        .await
    {
        Ok(Some(updated)) => updated,
        Ok(None) => return Err(not_found()),
        Err(RepositoryError::AlreadyExists) => return invalid(name_taken()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        template_id = %updated.id,
        team_id = %updated.team_id,
        user_id = %auth.user.id,
        "Template updated"
    );

    Ok(Redirect::to(&routes::index_path()).into_response())
}

/// Delete a template of the current team
pub async fn destroy(
    TeamUser { auth, team }: TeamUser,
    State(state): State<TemplatesState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect> {
    if !state.templates.delete(team.team_id, id).await? {
        return Err(not_found());
    }

    tracing::info!(
        template_id = %id,
        team_id = %team.team_id,
        user_id = %auth.user.id,
        "Template deleted"
    );

    Ok(Redirect::to(&routes::index_path()))
}

fn name_taken() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add("name", NAME_TAKEN);
    errors
}
