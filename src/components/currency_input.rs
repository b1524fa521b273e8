//! Currency input
//!
//! Amount entry prefixed with the currency symbol. Keystrokes are parsed
//! from the locale's display format, validated against the currency's
//! precision, and either accepted as a whole or dropped; the caller's
//! change handler only ever sees canonical values.

use super::part_test_id;
use crate::currency::{Currency, Locale};
use crate::ids::IdGenerator;
use crate::utils::formatting::{class_names, format_currency_value, parse_formatted_value};
use crate::utils::validation::is_valid_canonical_amount;

/// Handler receiving each accepted canonical value
pub type ChangeHandler = Box<dyn FnMut(&str) + Send>;

/// Configuration for a [`CurrencyInput`]
#[derive(Debug, Clone)]
pub struct CurrencyInputConfig {
    pub currency: Currency,
    /// Defaults to the currency's home locale
    pub locale: Option<Locale>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// Canonical value for controlled use; the owner updates it via `set_value`
    pub value: Option<String>,
    /// Initial canonical value for uncontrolled use
    pub default_value: Option<String>,
    pub class_name: Option<String>,
    pub test_id: Option<String>,
}

impl CurrencyInputConfig {
    pub fn new(currency: Currency) -> Self {
        CurrencyInputConfig {
            currency,
            locale: None,
            label: None,
            placeholder: None,
            value: None,
            default_value: None,
            class_name: None,
            test_id: None,
        }
    }
}

/// Locale-aware amount input
pub struct CurrencyInput {
    config: CurrencyInputConfig,
    locale: Locale,
    /// Display text of an uncontrolled input
    display: String,
    focused: bool,
    description_id: Option<String>,
    on_change: Option<ChangeHandler>,
}

impl CurrencyInput {
    /// Mounts an input
    ///
    /// A description id is only allocated when no label is configured.
    pub fn new(config: CurrencyInputConfig, ids: &IdGenerator) -> Self {
        let locale = config.locale.unwrap_or_else(|| config.currency.home_locale());
        let initial = config
            .value
            .as_deref()
            .or(config.default_value.as_deref())
            .unwrap_or_default();
        let display = format_currency_value(initial, locale);
        let description_id = if config.label.is_none() {
            Some(ids.next(&format!(
                "{}-amount-input",
                config.currency.code().to_lowercase()
            )))
        } else {
            None
        };

        CurrencyInput {
            config,
            locale,
            display,
            focused: false,
            description_id,
            on_change: None,
        }
    }

    /// Registers the handler that receives accepted canonical values
    pub fn on_change(mut self, handler: ChangeHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    pub fn currency(&self) -> Currency {
        self.config.currency
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_controlled(&self) -> bool {
        self.config.value.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handles the full text of the field after a keystroke
    ///
    /// # Returns
    /// `Some(canonical)` when the text was accepted and forwarded to the
    /// change handler, `None` when it was rejected and nothing changed
    pub fn handle_input(&mut self, display: &str) -> Option<String> {
        let canonical = parse_formatted_value(display, self.locale);
        if !is_valid_canonical_amount(&canonical, self.config.currency) {
            return None;
        }

        if !self.is_controlled() {
            self.display = display.to_string();
        }

        if let Some(handler) = self.on_change.as_mut() {
            handler(&canonical);
        }

        Some(canonical)
    }

    /// Marks the field focused
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Marks the field blurred and reformats the uncontrolled display
    pub fn blur(&mut self) {
        self.focused = false;
        if self.is_controlled() {
            return;
        }
        let canonical = parse_formatted_value(&self.display, self.locale);
        if !canonical.is_empty() {
            self.display = format_currency_value(&canonical, self.locale);
        }
    }

    /// Updates the controlled value
    pub fn set_value(&mut self, canonical: impl Into<String>) {
        self.config.value = Some(canonical.into());
    }

    /// Text currently shown in the field
    ///
    /// A controlled input shows its raw canonical value while focused
    /// and the formatted value otherwise.
    pub fn display_value(&self) -> String {
        match &self.config.value {
            Some(value) if self.focused => value.clone(),
            Some(value) => format_currency_value(value, self.locale),
            None => self.display.clone(),
        }
    }

    /// Canonical form of the current display
    pub fn canonical_value(&self) -> String {
        parse_formatted_value(&self.display_value(), self.locale)
    }

    pub fn symbol(&self) -> &'static str {
        self.config.currency.symbol()
    }

    pub fn placeholder(&self) -> String {
        self.config
            .placeholder
            .clone()
            .unwrap_or_else(|| self.config.currency.placeholder().to_string())
    }

    /// Virtual keyboard hint
    pub fn input_mode(&self) -> &'static str {
        "decimal"
    }

    pub fn label(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    /// Screen reader description, only present without a label
    pub fn description(&self) -> Option<String> {
        self.description_id
            .as_ref()
            .map(|_| format!("{} amount input", self.config.currency))
    }

    /// Id of the description element, only present without a label
    pub fn described_by(&self) -> Option<&str> {
        self.description_id.as_deref()
    }

    pub fn class_name(&self) -> String {
        let currency = format!("currency-input--{}", self.config.currency.code().to_lowercase());
        let locale = format!("currency-input--{}", self.locale.code().to_lowercase());
        class_names([
            Some("currency-input"),
            Some(currency.as_str()),
            Some(locale.as_str()),
            self.focused.then_some("currency-input--focused"),
            self.config.class_name.as_deref(),
        ])
    }

    pub fn test_id(&self) -> String {
        self.config
            .test_id
            .clone()
            .unwrap_or_else(|| "currency-input".to_string())
    }

    pub fn wrapper_test_id(&self) -> String {
        part_test_id(self.config.test_id.as_deref(), "currency-input", "wrapper")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn mount(config: CurrencyInputConfig) -> CurrencyInput {
        CurrencyInput::new(config, &IdGenerator::new())
    }

    #[test]
    fn test_accepts_valid_keystrokes() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Usd));
        assert_eq!(input.handle_input("1"), Some("1".to_string()));
        assert_eq!(input.handle_input("1,234.5"), Some("1234.5".to_string()));
        assert_eq!(input.display_value(), "1,234.5");
    }

    #[test]
    fn test_rejects_excess_precision_without_changing_display() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Usd));
        input.handle_input("123.45");
        assert_eq!(input.handle_input("123.456"), None);
        assert_eq!(input.display_value(), "123.45");
    }

    #[test]
    fn test_rejects_leading_zeros() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Btc));
        input.handle_input("0");
        assert_eq!(input.handle_input("01"), None);
        assert_eq!(input.display_value(), "0");
    }

    #[test]
    fn test_btc_accepts_eight_decimals() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Btc));
        assert_eq!(input.handle_input("0.12345678"), Some("0.12345678".to_string()));
        assert_eq!(input.handle_input("0.123456789"), None);
    }

    #[test]
    fn test_eur_defaults_to_eu_locale() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Eur));
        assert_eq!(input.locale(), Locale::Eu);
        assert_eq!(input.handle_input("1.234,56"), Some("1234.56".to_string()));
        assert_eq!(input.handle_input("1.234,567"), None);
    }

    #[test]
    fn test_blur_reformats() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Usd));
        input.focus();
        input.handle_input("1234567.8");
        input.blur();
        assert_eq!(input.display_value(), "1,234,567.8");
    }

    #[test]
    fn test_change_handler_receives_canonical() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut input = mount(CurrencyInputConfig {
            locale: Some(Locale::Eu),
            ..CurrencyInputConfig::new(Currency::Usd)
        })
        .on_change(Box::new(move |v| sink.lock().unwrap().push(v.to_string())));

        input.handle_input("12,5");
        input.handle_input("12,555");
        input.handle_input("1.200,5");

        assert_eq!(*seen.lock().unwrap(), vec!["12.5", "1200.5"]);
    }

    #[test]
    fn test_controlled_display() {
        let mut input = mount(CurrencyInputConfig {
            value: Some("1234.5".to_string()),
            ..CurrencyInputConfig::new(Currency::Usd)
        });
        assert_eq!(input.display_value(), "1,234.5");

        input.focus();
        assert_eq!(input.display_value(), "1234.5");

        input.blur();
        input.set_value("99000");
        assert_eq!(input.display_value(), "99,000");
    }

    #[test]
    fn test_default_value_is_formatted() {
        let input = mount(CurrencyInputConfig {
            default_value: Some("2500".to_string()),
            locale: Some(Locale::Eu),
            ..CurrencyInputConfig::new(Currency::Btc)
        });
        assert_eq!(input.display_value(), "2.500");
    }

    #[test]
    fn test_description_only_without_label() {
        let input = mount(CurrencyInputConfig::new(Currency::Btc));
        assert_eq!(input.description().as_deref(), Some("BTC amount input"));
        assert_eq!(input.described_by(), Some("btc-amount-input-1"));

        let labelled = mount(CurrencyInputConfig {
            label: Some("Amount".to_string()),
            ..CurrencyInputConfig::new(Currency::Btc)
        });
        assert_eq!(labelled.description(), None);
        assert_eq!(labelled.described_by(), None);
    }

    #[test]
    fn test_presentation() {
        let mut input = mount(CurrencyInputConfig::new(Currency::Eur));
        assert_eq!(input.symbol(), "€");
        assert_eq!(input.placeholder(), "100,00");
        assert_eq!(input.input_mode(), "decimal");
        assert_eq!(input.test_id(), "currency-input");
        assert_eq!(input.wrapper_test_id(), "currency-input-wrapper");

        input.focus();
        assert_eq!(
            input.class_name(),
            "currency-input currency-input--eur currency-input--eu currency-input--focused"
        );
    }
}
