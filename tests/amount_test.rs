//! Integration tests for amount formatting and validation
//!
//! These tests exercise the formatter, parser and validator together the
//! way the currency input uses them.

use satoshi_ui::components::{CurrencyInput, CurrencyInputConfig};
use satoshi_ui::utils::formatting::{format_currency_value, parse_formatted_value};
use satoshi_ui::utils::validation::{is_valid_amount, is_valid_canonical_amount};
use satoshi_ui::{Currency, IdGenerator, Locale};

#[test]
fn test_format_then_parse_restores_canonical_value() {
    let values = ["0", "0.5", "1234", "1234567.89", "21000000.00000001", "1000."];

    for value in values {
        for locale in [Locale::Us, Locale::Eu] {
            let formatted = format_currency_value(value, locale);
            assert_eq!(
                parse_formatted_value(&formatted, locale),
                value,
                "Round trip failed for {} in {}",
                value,
                locale
            );
        }
    }
}

#[test]
fn test_formatting_by_locale() {
    assert_eq!(format_currency_value("1234567.89", Locale::Us), "1,234,567.89");
    assert_eq!(format_currency_value("1234567.89", Locale::Eu), "1.234.567,89");
    assert_eq!(format_currency_value("", Locale::Us), "");
    assert_eq!(format_currency_value("999", Locale::Eu), "999");
}

#[test]
fn test_precision_limits_per_currency() {
    assert!(is_valid_amount("0.12345678", Currency::Btc));
    assert!(!is_valid_amount("0.123456789", Currency::Btc));
    assert!(is_valid_amount("1,000.50", Currency::Usd));
    assert!(!is_valid_amount("1,000.505", Currency::Usd));
    assert!(is_valid_amount("1.000,50", Currency::Eur));
    assert!(!is_valid_amount("1.000,505", Currency::Eur));
}

#[test]
fn test_rejected_shapes() {
    let rejected = ["01", "00.5", "-1", "1e5", "abc", " 1", "1 000"];
    for raw in rejected {
        for currency in Currency::ALL {
            assert!(
                !is_valid_amount(raw, currency),
                "{:?} should be rejected for {}",
                raw,
                currency
            );
        }
    }

    // Separator-only mistakes depend on the home locale
    assert!(!is_valid_amount(".5", Currency::Usd));
    assert!(!is_valid_amount(",5", Currency::Eur));
    assert!(!is_valid_amount("1.2.3", Currency::Btc));
    assert!(!is_valid_amount("1,2,3", Currency::Eur));
    assert!(is_valid_amount("", Currency::Btc));
}

#[test]
fn test_formatted_value_is_valid_for_its_currency() {
    let cases = [
        ("1234.5", Currency::Usd),
        ("1234.56", Currency::Eur),
        ("0.00000001", Currency::Btc),
        ("21000000", Currency::Btc),
    ];

    for (canonical, currency) in cases {
        assert!(is_valid_canonical_amount(canonical, currency));
        let formatted = format_currency_value(canonical, currency.home_locale());
        assert!(
            is_valid_amount(&formatted, currency),
            "{} should validate for {}",
            formatted,
            currency
        );
    }
}

#[test]
fn test_input_typing_sequence() {
    let ids = IdGenerator::new();
    let mut input = CurrencyInput::new(CurrencyInputConfig::new(Currency::Eur), &ids);
    input.focus();

    let mut accepted = Vec::new();
    for text in ["1", "12", "123", "1234", "1234,", "1234,5", "1234,56", "1234,567"] {
        if let Some(canonical) = input.handle_input(text) {
            accepted.push(canonical);
        }
    }

    assert_eq!(
        accepted,
        vec!["1", "12", "123", "1234", "1234.", "1234.5", "1234.56"]
    );
    assert_eq!(input.display_value(), "1234,56");

    input.blur();
    assert_eq!(input.display_value(), "1.234,56");
    assert_eq!(input.canonical_value(), "1234.56");
}
