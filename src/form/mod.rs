//! The web form: request parsing, template rendering and HTTP handlers.

pub mod handlers;
pub mod models;
pub mod template;
