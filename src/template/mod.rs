// ABOUTME: Template engine module for formatkit
// ABOUTME: Provides placeholder scanning, dotted-path resolution, and substitution

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
