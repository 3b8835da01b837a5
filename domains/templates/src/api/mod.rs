//! HTTP layer for the Templates domain

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;

pub use middleware::TemplatesState;
