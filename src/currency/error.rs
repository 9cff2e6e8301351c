// ABOUTME: Error types for currency formatting operations
// ABOUTME: Defines the error surface for registry lookups

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("unknown currency code or symbol: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, CurrencyError>;
