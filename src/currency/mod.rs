// ABOUTME: Currency formatting module for formatkit
// ABOUTME: Exports the currency registry and fixed-decimal formatting functions

pub mod config;
pub mod error;
pub mod formatter;

pub use config::{lookup, CurrencyConfig, SymbolPosition, CURRENCIES};
pub use error::{CurrencyError, Result};
pub use formatter::{format, format_with};
