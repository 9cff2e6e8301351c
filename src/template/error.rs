// ABOUTME: Error types for template engine operations
// ABOUTME: Defines the error surface for context validation and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("invalid template context: expected an object, got {found}")]
    InvalidContext { found: &'static str },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
