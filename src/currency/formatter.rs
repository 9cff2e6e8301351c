// ABOUTME: Fixed two-decimal currency formatting with locale separators
// ABOUTME: Groups thousands, maps separators per currency, and places the symbol

use super::config::{lookup, SymbolPosition};
use super::error::{CurrencyError, Result};

/// Format a value in the given currency, symbol included.
///
/// The currency may be a three-letter code (`"EUR"`) or a symbol (`"€"`).
pub fn format(value: f64, currency: &str) -> Result<String> {
    format_with(value, currency, true)
}

/// Format a value in the given currency, optionally omitting the symbol
pub fn format_with(value: f64, currency: &str, show_symbol: bool) -> Result<String> {
    let config =
        lookup(currency).ok_or_else(|| CurrencyError::Unknown(currency.to_string()))?;

    let amount = group_thousands(value, config.decimal, config.thousand);
    if !show_symbol {
        return Ok(amount);
    }

    let formatted = match config.position {
        SymbolPosition::Start => format!("{} {}", config.symbol, amount),
        SymbolPosition::End => format!("{} {}", amount, config.symbol),
    };
    Ok(formatted)
}

/// Render a value with two decimals, a thousands separator every three
/// integer digits, and the given decimal separator.
fn group_thousands(value: f64, decimal: char, thousand: char) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    let len = int_digits.len();
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(thousand);
        }
        grouped.push(c);
    }
    grouped.push(decimal);
    grouped.push_str(frac_digits);
    grouped
}
