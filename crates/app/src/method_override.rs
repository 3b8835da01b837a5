//! HTML form method override
//!
//! Browsers only submit GET and POST. A urlencoded POST carrying a
//! `_method` field of PUT, PATCH or DELETE is dispatched as that method.
//! This has to run before routing, so the whole router is wrapped rather
//! than layered.

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Router,
};
use tower::Layer;

use crate::MAX_BODY_BYTES;

pub const METHOD_FIELD: &str = "_method";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Wrap a router so method overrides are applied before route matching
pub fn with_method_override(router: Router) -> Router {
    let service = axum::middleware::from_fn(method_override).layer(router);
    Router::new().fallback_service(service)
}

pub async fn method_override(request: Request, next: Next) -> Response {
    if request.method() != Method::POST || !is_form(&request) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected form body");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    if let Some(method) = overridden_method(&bytes) {
        tracing::trace!(%method, uri = %parts.uri, "Method override");
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

/// The method named by the `_method` field, if it is one we dispatch
fn overridden_method(body: &[u8]) -> Option<Method> {
    let (_, value) = url::form_urlencoded::parse(body).find(|(key, _)| key == METHOD_FIELD)?;

    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
