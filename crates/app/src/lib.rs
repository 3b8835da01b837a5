//! Sendportal application composition root
//!
//! Composes the domain routers, session routes and shared middleware into a
//! single application.

pub mod method_override;
pub mod session;

use std::sync::Arc;

use axum::{response::Redirect, routing::get, Router};
use sendportal_auth::{AuthBackend, AuthConfig};
use sendportal_common::{Config, Views};
use sendportal_templates::{PgTemplateStore, TemplateStore, TemplatesState};
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;

pub use method_override::with_method_override;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router backed by Postgres
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth = AuthBackend::postgres(pool.clone(), AuthConfig::from(config));
    let templates: Arc<dyn TemplateStore> = Arc::new(PgTemplateStore::new(pool));

    build_app(templates, auth)
}

/// Build the router from already-constructed stores
pub fn build_app(
    templates: Arc<dyn TemplateStore>,
    auth: AuthBackend,
) -> Result<Router, anyhow::Error> {
    let views = Arc::new(build_views()?);

    let templates_state = TemplatesState {
        templates,
        auth: auth.clone(),
        views: views.clone(),
    };
    let session_state = session::SessionState { auth, views };

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(|| async { Redirect::to(&sendportal_templates::routes::index_path()) }),
        )
        .merge(session::routes().with_state(session_state))
        .merge(sendportal_templates::routes::routes().with_state(templates_state));

    Ok(with_method_override(app))
}

/// Compile every page the application renders
pub fn build_views() -> Result<Views, anyhow::Error> {
    let mut views = Views::new()?;
    session::register_views(&mut views)?;
    sendportal_templates::register_views(&mut views)?;
    Ok(views)
}

/// Request body size limit applied to the whole application
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
