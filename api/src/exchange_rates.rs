//! Provides the table of exchange rates relative to the base currency.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::currency::Currency;
use crate::display_amount::DisplayAmount;

/// Reasons a rate cannot be stored in an [`ExchangeRates`] table.
#[derive(Error, Debug, PartialEq)]
pub enum RateError {
    #[error("rate for {0:?} must be a positive finite number, got {1}")]
    NotPositive(Currency, f64),
    #[error("the base currency rate is fixed at 1.0, got {0}")]
    BaseNotUnit(f64),
}

/// Multiplicative rates from [`Currency::BASE`] to each display currency.
///
/// The base currency always maps to 1.0 and every stored rate is positive and
/// finite. Lookups for a currency without an entry fall back to the base
/// rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates(HashMap<Currency, f64>);

impl ExchangeRates {
    /// Creates a table that only knows the base currency.
    pub fn new() -> Self {
        Self(HashMap::from([(Currency::BASE, 1.0)]))
    }

    /// The fixed rates every currency ships with.
    pub fn standard() -> Self {
        Self(
            Currency::iter()
                .map(|currency| (currency, currency.standard_rate()))
                .collect(),
        )
    }

    /// Inserts or updates the rate for a currency, returning the old rate.
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Result<Option<f64>, RateError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::NotPositive(currency, rate));
        }
        if currency.is_base() && rate != 1.0 {
            return Err(RateError::BaseNotUnit(rate));
        }
        Ok(self.0.insert(currency, rate))
    }

    /// Returns the rate for `currency`, or 1.0 when the table has none.
    pub fn rate(&self, currency: Currency) -> f64 {
        self.0.get(&currency).copied().unwrap_or(1.0)
    }

    /// Converts a base-currency amount into `currency`.
    pub fn convert(&self, amount_base: f64, currency: Currency) -> f64 {
        amount_base * self.rate(currency)
    }

    /// Converts and rounds to the currency's minor unit.
    ///
    /// `None` for amounts too large to count in minor units.
    pub fn to_display(&self, amount_base: f64, currency: Currency) -> Option<DisplayAmount> {
        DisplayAmount::try_from_float(self.convert(amount_base, currency), currency)
    }

    /// Converts and rounds to two decimals, e.g. for chart values.
    pub fn convert_rounded(&self, amount_base: f64, currency: Currency) -> f64 {
        match self.to_display(amount_base, currency) {
            Some(amount) => amount.as_f64(),
            None => self.convert(amount_base, currency),
        }
    }

    /// Formats a base-currency amount in `currency` with its symbol and two
    /// decimals, e.g. `$12.00`.
    pub fn format(&self, amount_base: f64, currency: Currency) -> String {
        if let Some(amount) = self.to_display(amount_base, currency) {
            return amount.to_string_with_symbol();
        }
        // Past the minor-unit range two decimals carry no precision anyway.
        let value = self.convert(amount_base, currency);
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}{:.2}", sign, currency.symbol(), value.abs())
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_fixed_rates() {
        let rates = ExchangeRates::standard();
        assert_eq!(rates.rate(Currency::INR), 1.0);
        assert_eq!(rates.rate(Currency::USD), 0.012);
        assert_eq!(rates.rate(Currency::EUR), 0.011);
    }

    #[test]
    fn missing_rate_falls_back_to_base() {
        let rates = ExchangeRates::new();
        assert_eq!(rates.convert(500.0, Currency::EUR), 500.0);
        assert_eq!(rates.format(500.0, Currency::EUR), "€500.00");
    }

    #[test]
    fn rejects_rates_that_break_invariants() {
        let mut rates = ExchangeRates::new();
        assert_eq!(
            rates.insert(Currency::USD, 0.0),
            Err(RateError::NotPositive(Currency::USD, 0.0))
        );
        assert!(rates.insert(Currency::USD, f64::NAN).is_err());
        assert_eq!(
            rates.insert(Currency::BASE, 2.0),
            Err(RateError::BaseNotUnit(2.0))
        );
        assert_eq!(rates.insert(Currency::USD, 0.02), Ok(None));
        assert_eq!(rates.insert(Currency::USD, 0.013), Ok(Some(0.02)));
        assert_eq!(rates.format(1000.0, Currency::USD), "$13.00");
    }

    #[test]
    fn huge_amounts_still_format() {
        let rates = ExchangeRates::standard();
        assert_eq!(rates.format(1e17, Currency::INR), "₹100000000000000000.00");
        assert_eq!(rates.format(-1e19, Currency::INR), "-₹10000000000000000000.00");
        assert_eq!(rates.convert_rounded(1e19, Currency::INR), 1e19);
        assert_eq!(rates.to_display(1e19, Currency::INR), None);
    }

    #[test]
    fn rounded_conversion_follows_the_table() {
        let mut rates = ExchangeRates::new();
        rates.insert(Currency::USD, 0.0125).unwrap();
        assert_eq!(rates.convert_rounded(999.0, Currency::USD), 12.49);
        assert_eq!(rates.convert_rounded(999.0, Currency::EUR), 999.0);
    }
}
