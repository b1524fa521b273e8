//! Amount validation
//!
//! Keystroke-level gatekeeping for currency input. Every candidate value
//! the user types is checked here before it is allowed to replace the
//! current display value; anything that fails is dropped silently.

use crate::currency::Currency;

/// Checks whether `raw` is an acceptable amount for `currency`
///
/// An empty string is valid and means "no input yet". Otherwise the
/// grouping separators of the currency's home locale are stripped and its
/// decimal separator is normalized to `.` before the canonical check.
///
/// # Arguments
/// - `raw` - The value as typed, possibly containing grouping separators
/// - `currency` - Determines both the separator convention and the
///   maximum number of fractional digits
///
/// # Returns
/// `true` if the value is empty or a well-formed amount within the
/// currency's precision
pub fn is_valid_amount(raw: &str, currency: Currency) -> bool {
    if raw.is_empty() {
        return true;
    }

    let locale = currency.home_locale();
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != locale.thousands_separator())
        .map(|c| {
            if c == locale.decimal_separator() {
                '.'
            } else {
                c
            }
        })
        .collect();

    is_valid_canonical_amount(&cleaned, currency)
}

/// Checks an already-canonical amount against the currency's precision
///
/// Accepts `^\d+(\.\d{0,N})?$` where N is the currency's maximum number
/// of decimals. A trailing bare decimal point is accepted so the user can
/// keep typing. Integer parts such as `"0100"` or `"00"` are rejected.
pub fn is_valid_canonical_amount(canonical: &str, currency: Currency) -> bool {
    if canonical.is_empty() {
        return true;
    }

    let (int_part, frac_part) = match canonical.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (canonical, None),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // A lone "0" is fine, "0100" is not
    if int_part.len() > 1 && int_part.starts_with('0') {
        return false;
    }

    match frac_part {
        None => true,
        Some(frac) => {
            frac.len() <= currency.max_decimals() && frac.chars().all(|c| c.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        for currency in Currency::ALL {
            assert!(is_valid_amount("", currency));
        }
    }

    #[test]
    fn test_btc_precision() {
        assert!(is_valid_amount("0.12345678", Currency::Btc));
        assert!(!is_valid_amount("0.123456789", Currency::Btc));
    }

    #[test]
    fn test_fiat_precision() {
        assert!(is_valid_amount("123.45", Currency::Usd));
        assert!(!is_valid_amount("123.456", Currency::Usd));
        assert!(is_valid_amount("123,45", Currency::Eur));
        assert!(!is_valid_amount("123,456", Currency::Eur));
    }

    #[test]
    fn test_trailing_decimal_point_accepted() {
        assert!(is_valid_amount("123.", Currency::Usd));
        assert!(is_valid_amount("123,", Currency::Eur));
        assert!(is_valid_canonical_amount("0.", Currency::Btc));
    }

    #[test]
    fn test_grouping_separators_stripped() {
        assert!(is_valid_amount("1,234,567.89", Currency::Usd));
        assert!(is_valid_amount("1.234.567,89", Currency::Eur));
    }

    #[test]
    fn test_leading_zeros_rejected() {
        assert!(!is_valid_amount("0100", Currency::Usd));
        assert!(!is_valid_amount("00", Currency::Btc));
        assert!(!is_valid_canonical_amount("00.5", Currency::Btc));
        assert!(is_valid_amount("0", Currency::Usd));
        assert!(is_valid_amount("0.5", Currency::Usd));
    }

    #[test]
    fn test_malformed_rejected() {
        assert!(!is_valid_amount(".5", Currency::Usd));
        assert!(!is_valid_amount("12a", Currency::Usd));
        assert!(!is_valid_amount("-1", Currency::Btc));
        assert!(!is_valid_amount("1.2.3", Currency::Btc));
        assert!(!is_valid_canonical_amount("1,000", Currency::Usd));
        assert!(!is_valid_canonical_amount("１２", Currency::Usd));
    }
}
