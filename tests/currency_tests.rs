// ABOUTME: Integration tests for currency formatting
// ABOUTME: Tests registry lookup and formatted output through the public API

use formatkit::currency::{self, CurrencyError, SymbolPosition};

#[test]
fn test_format_each_supported_currency() {
    assert_eq!(currency::format(1234.56, "EUR").unwrap(), "1.234,56 €");
    assert_eq!(currency::format(1234.56, "USD").unwrap(), "$ 1,234.56");
    assert_eq!(currency::format(1234.56, "BRL").unwrap(), "1.234,56 R$");
}

#[test]
fn test_format_accepts_symbol_in_place_of_code() {
    assert_eq!(currency::format(10.0, "€").unwrap(), "10,00 €");
    assert_eq!(currency::format(10.0, "$").unwrap(), "$ 10.00");
}

#[test]
fn test_format_rounds_to_two_decimals() {
    assert_eq!(currency::format(0.005, "USD").unwrap(), "$ 0.01");
    assert_eq!(currency::format(2.0, "USD").unwrap(), "$ 2.00");
}

#[test]
fn test_unknown_currency_is_an_error() {
    let err = currency::format(1.0, "XYZ").unwrap_err();
    assert!(matches!(err, CurrencyError::Unknown(_)));
    assert_eq!(err.to_string(), "unknown currency code or symbol: XYZ");
}

#[test]
fn test_registry_exposes_configs() {
    let eur = currency::lookup("EUR").unwrap();
    assert_eq!(eur.position, SymbolPosition::End);

    let usd = currency::lookup("USD").unwrap();
    assert_eq!(usd.position, SymbolPosition::Start);

    assert_eq!(currency::CURRENCIES.len(), 3);
}
