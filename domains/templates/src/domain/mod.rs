//! Domain layer for templates

pub mod entities;
pub mod form;
