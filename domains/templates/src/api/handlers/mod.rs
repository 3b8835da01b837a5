//! Request handlers for the Templates domain

pub mod templates;
