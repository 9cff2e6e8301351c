// ABOUTME: Currency registry with symbols, separators, and symbol placement
// ABOUTME: Provides lookup by currency code with fallback to symbol search

use serde::Serialize;
use tracing::debug;

/// Where the currency symbol sits relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Start,
    End,
}

/// Formatting configuration for a single currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyConfig {
    pub code: &'static str,
    pub symbol: &'static str,
    pub decimal: char,
    pub thousand: char,
    pub position: SymbolPosition,
}

/// Supported currencies
pub const CURRENCIES: &[CurrencyConfig] = &[
    CurrencyConfig {
        code: "EUR",
        symbol: "€",
        decimal: ',',
        thousand: '.',
        position: SymbolPosition::End,
    },
    CurrencyConfig {
        code: "USD",
        symbol: "$",
        decimal: '.',
        thousand: ',',
        position: SymbolPosition::Start,
    },
    CurrencyConfig {
        code: "BRL",
        symbol: "R$",
        decimal: ',',
        thousand: '.',
        position: SymbolPosition::End,
    },
];

/// Find a currency by its three-letter code, falling back to symbol search
pub fn lookup(code_or_symbol: &str) -> Option<&'static CurrencyConfig> {
    if let Some(config) = CURRENCIES.iter().find(|c| c.code == code_or_symbol) {
        return Some(config);
    }
    debug!("currency '{}' not found by code, trying symbol lookup", code_or_symbol);
    CURRENCIES.iter().find(|c| c.symbol == code_or_symbol)
}
