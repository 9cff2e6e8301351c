// ABOUTME: Main library module for the formatkit formatting helpers
// ABOUTME: Exports all helper modules and provides the public API

pub mod currency;
pub mod duration;
pub mod pad;
pub mod query;
pub mod template;

// Re-export commonly used types
pub use currency::{CurrencyConfig, CurrencyError, SymbolPosition};
pub use template::{TemplateContext, TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
