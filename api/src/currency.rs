//! Defines the display currencies supported by the dashboard.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// A currency the dashboard can display amounts in.
///
/// The backend stores and transmits every amount in [`Currency::BASE`]; the
/// other variants only exist on the client, at render time.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    INR, // Indian Rupee
    USD, // United States Dollar
    EUR, // Euro
}

impl Currency {
    /// The currency in which the backend keeps all amounts.
    pub const BASE: Currency = Currency::INR;

    /// Parses a currency code, falling back to [`Currency::BASE`] for
    /// anything unrecognized.
    pub fn from_code(code: &str) -> Self {
        match Self::from_str(code.trim()) {
            Ok(currency) => currency,
            Err(_) => {
                dioxus_logger::tracing::warn!(
                    "unknown currency code {:?}, using {}",
                    code,
                    Self::BASE.code()
                );
                Self::BASE
            }
        }
    }

    /// Returns the number of decimal digits shown for the currency.
    pub fn decimals(&self) -> u8 {
        2
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::INR => "Indian Rupee",
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
        }
    }

    /// The fixed multiplicative rate from the base currency.
    pub fn standard_rate(&self) -> f64 {
        match self {
            Self::INR => 1.0,
            Self::USD => 0.012,
            Self::EUR => 0.011,
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(Currency::from_code("usd"), Currency::USD);
        assert_eq!(Currency::from_code(" EUR "), Currency::EUR);
        assert_eq!(Currency::from_code("INR"), Currency::INR);
    }

    #[test]
    fn unknown_code_falls_back_to_base() {
        assert_eq!(Currency::from_code("GBP"), Currency::BASE);
        assert_eq!(Currency::from_code(""), Currency::BASE);
    }

    #[test]
    fn base_is_default_and_has_unit_rate() {
        assert_eq!(Currency::default(), Currency::BASE);
        assert_eq!(Currency::BASE.standard_rate(), 1.0);
        for currency in Currency::iter() {
            assert!(currency.standard_rate() > 0.0);
            assert_eq!(Currency::from_code(currency.code()), currency);
        }
    }
}
