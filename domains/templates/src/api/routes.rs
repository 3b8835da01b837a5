//! Route definitions for the Templates domain

use axum::{routing::get, Router};
use uuid::Uuid;

use super::handlers::templates;
use super::middleware::TemplatesState;

pub fn index_path() -> String {
    "/templates".to_string()
}

pub fn create_path() -> String {
    "/templates/create".to_string()
}

pub fn edit_path(id: Uuid) -> String {
    format!("/templates/{}/edit", id)
}

/// Target of store (POST), update (PUT) and destroy (DELETE)
pub fn member_path(id: Uuid) -> String {
    format!("/templates/{}", id)
}

/// Create all Templates domain routes
pub fn routes() -> Router<TemplatesState> {
    Router::new()
        .route("/templates", get(templates::index).post(templates::store))
        .route("/templates/create", get(templates::create))
        .route("/templates/{id}/edit", get(templates::edit))
        .route(
            "/templates/{id}",
            axum::routing::put(templates::update)
                .patch(templates::update)
                .delete(templates::destroy),
        )
}
