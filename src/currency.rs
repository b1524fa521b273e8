//! Currency and locale tags
//!
//! Closed enumerations describing which currency an amount is denominated
//! in and which separator convention it is displayed with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Btc,
    Usd,
    Eur,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 3] = [Currency::Btc, Currency::Usd, Currency::Eur];

    /// Maximum number of fractional digits an amount may carry
    pub fn max_decimals(self) -> usize {
        match self {
            Currency::Btc => 8,
            Currency::Usd | Currency::Eur => 2,
        }
    }

    /// Symbol shown in front of the input field
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Btc => "₿",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Currency::Btc => "0.021",
            Currency::Usd => "100.00",
            Currency::Eur => "100,00",
        }
    }

    /// Locale used when none is configured explicitly
    pub fn home_locale(self) -> Locale {
        match self {
            Currency::Eur => Locale::Eu,
            Currency::Btc | Currency::Usd => Locale::Us,
        }
    }

    /// ISO-style code, e.g. `"BTC"`
    pub fn code(self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BTC" => Ok(Currency::Btc),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(anyhow::anyhow!("Unknown currency '{}'", other)),
        }
    }
}

/// Separator conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    /// `1,234.56`
    Us,
    /// `1.234,56`
    Eu,
}

impl Locale {
    pub fn thousands_separator(self) -> char {
        match self {
            Locale::Us => ',',
            Locale::Eu => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Locale::Us => '.',
            Locale::Eu => ',',
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Us => "US",
            Locale::Eu => "EU",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(Locale::Us),
            "EU" => Ok(Locale::Eu),
            other => Err(anyhow::anyhow!("Unknown locale '{}'", other)),
        }
    }
}
