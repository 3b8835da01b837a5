//! Templates domain state and auth backend integration

use crate::TemplateStore;
use axum::extract::FromRef;
use sendportal_auth::AuthBackend;
use sendportal_common::Views;
use std::sync::Arc;

/// Application state for the Templates domain
#[derive(Clone)]
pub struct TemplatesState {
    pub templates: Arc<dyn TemplateStore>,
    pub auth: AuthBackend,
    pub views: Arc<Views>,
}

impl FromRef<TemplatesState> for AuthBackend {
    fn from_ref(state: &TemplatesState) -> Self {
        state.auth.clone()
    }
}
