//! Display formatting utilities
//!
//! Conversions between canonical amounts and their locale-formatted
//! display form, plus the string helpers the components use to shorten
//! long addresses and hide secrets.

use crate::currency::Locale;

/// Number of mask characters shown for a hidden secret, regardless of its length
pub const MASK_LENGTH: usize = 21;

/// Formats a canonical amount for display
///
/// Groups the integer part every three digits from the right with the
/// locale's thousands separator and joins the fractional part with the
/// locale's decimal separator. A trailing decimal point is preserved so
/// in-progress input such as `"12."` survives formatting.
///
/// # Arguments
/// - `canonical` - Amount using `.` as decimal point and no grouping
/// - `locale` - Separator convention to format with
///
/// # Returns
/// The display string, or an empty string for empty input
pub fn format_currency_value(canonical: &str, locale: Locale) -> String {
    if canonical.is_empty() {
        return String::new();
    }

    let (int_part, frac_part) = match canonical.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (canonical, None),
    };

    let mut result = group_thousands(int_part, locale.thousands_separator());

    if let Some(frac) = frac_part {
        result.push(locale.decimal_separator());
        result.push_str(frac);
    }

    result
}

/// Converts a display string back into its canonical form
///
/// Strips the locale's thousands separator and replaces its decimal
/// separator with `.`. The result is not validated.
pub fn parse_formatted_value(display: &str, locale: Locale) -> String {
    display
        .chars()
        .filter(|&c| c != locale.thousands_separator())
        .map(|c| {
            if c == locale.decimal_separator() {
                '.'
            } else {
                c
            }
        })
        .collect()
}

fn group_thousands(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }

    grouped
}

/// Shortens text to its first and last characters with an ellipsis between
///
/// Text that would not get shorter (length up to `start + end + 3`) is
/// returned unchanged. Works on characters, not bytes.
///
/// # Example
/// `truncate_text("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", 6, 7)`
/// yields `"bc1qxy...jhx0wlh"`.
pub fn truncate_text(text: &str, start_chars: usize, end_chars: usize) -> String {
    let len = text.chars().count();
    if len <= start_chars + end_chars + 3 {
        return text.to_string();
    }

    let head: String = text.chars().take(start_chars).collect();
    let tail: String = text.chars().skip(len - end_chars).collect();
    format!("{}...{}", head, tail)
}

/// Truncates a Bitcoin address to six leading and six trailing characters
pub fn truncate_btc_address(address: &str) -> String {
    truncate_text(address, 6, 6)
}

/// Masks a secret with a fixed number of mask characters
///
/// The mask length does not depend on the secret, so it leaks nothing
/// about it. An empty secret yields an empty string.
pub fn mask_secret(secret: &str, mask_character: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    mask_character.repeat(MASK_LENGTH)
}

/// Joins the present, non-empty class name fragments with single spaces
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_us() {
        assert_eq!(format_currency_value("1234.56", Locale::Us), "1,234.56");
        assert_eq!(format_currency_value("1234567", Locale::Us), "1,234,567");
        assert_eq!(format_currency_value("123", Locale::Us), "123");
    }

    #[test]
    fn test_format_eu() {
        assert_eq!(format_currency_value("1234.56", Locale::Eu), "1.234,56");
        assert_eq!(format_currency_value("1000000", Locale::Eu), "1.000.000");
    }

    #[test]
    fn test_format_keeps_trailing_decimal_point() {
        assert_eq!(format_currency_value("1234.", Locale::Us), "1,234.");
        assert_eq!(format_currency_value("1234.", Locale::Eu), "1.234,");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_currency_value("", Locale::Us), "");
    }

    #[test]
    fn test_parse_formatted_value() {
        assert_eq!(parse_formatted_value("1,234.56", Locale::Us), "1234.56");
        assert_eq!(parse_formatted_value("1.234,56", Locale::Eu), "1234.56");
        assert_eq!(parse_formatted_value("", Locale::Eu), "");
    }

    #[test]
    fn test_round_trip() {
        let values = ["0", "0.5", "12", "1234", "1234.5", "98765432.12345678", "7."];
        for locale in [Locale::Us, Locale::Eu] {
            for v in values {
                let display = format_currency_value(v, locale);
                assert_eq!(parse_formatted_value(&display, locale), v, "locale {}", locale);
            }
        }
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(
            truncate_text("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", 6, 7),
            "bc1qxy...jhx0wlh"
        );
        assert_eq!(truncate_text("short", 6, 6), "short");
        // 15 chars is exactly start + end + 3
        assert_eq!(truncate_text("abcdefghijklmno", 6, 6), "abcdefghijklmno");
    }

    #[test]
    fn test_truncate_btc_address() {
        assert_eq!(
            truncate_btc_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
            "bc1qxy...hx0wlh"
        );
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "₿₿₿₿₿₿-middle-part-€€€€€€";
        assert_eq!(truncate_text(text, 6, 6), "₿₿₿₿₿₿...€€€€€€");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("", "•"), "");
        assert_eq!(mask_secret("abc", "*"), "*".repeat(MASK_LENGTH));
        assert_eq!(mask_secret("a much longer secret phrase", "•").chars().count(), 21);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            class_names([Some("secret"), None, Some(""), Some("secret--revealed")]),
            "secret secret--revealed"
        );
        assert_eq!(class_names([None::<&str>, None]), "");
    }
}
