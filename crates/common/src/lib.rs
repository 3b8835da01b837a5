//! Shared utilities, configuration, and error handling for Sendportal
//!
//! This crate provides common functionality used across the Sendportal application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Pagination and form validation helpers
//! - The shared view registry used for server-rendered pages

pub mod config;
pub mod db;
pub mod error;
pub mod pagination;
pub mod validation;
pub mod views;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use pagination::{Page, Pagination};
pub use validation::FieldErrors;
pub use views::Views;
