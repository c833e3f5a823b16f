//! Pure conversion of base-currency amounts for display.
//!
//! Amounts coming from the backend are always in [`Currency::BASE`]. Nothing
//! here mutates its input, so callers can convert the same raw value as many
//! times as they re-render.

use std::sync::LazyLock;

use crate::currency::Currency;
use crate::exchange_rates::ExchangeRates;

/// The fixed rates every conversion below goes through.
static STANDARD_RATES: LazyLock<ExchangeRates> = LazyLock::new(ExchangeRates::standard);

/// Converts a base-currency amount into `currency` using the fixed rates.
pub fn convert(amount_base: f64, currency: Currency) -> f64 {
    STANDARD_RATES.convert(amount_base, currency)
}

/// Converts and rounds to the currency's minor unit, e.g. for chart values.
pub fn convert_rounded(amount_base: f64, currency: Currency) -> f64 {
    STANDARD_RATES.convert_rounded(amount_base, currency)
}

/// Formats a base-currency amount as symbol plus two decimals, e.g. `$12.00`.
pub fn format(amount_base: f64, currency: Currency) -> String {
    STANDARD_RATES.format(amount_base, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn convert_is_amount_times_rate() {
        for currency in Currency::iter() {
            for amount in [0.0, 1.0, 99.99, 1000.0, 123456.78] {
                assert_eq!(convert(amount, currency), amount * currency.standard_rate());
                assert_eq!(convert(amount, currency), convert(amount, currency));
            }
        }
        assert_eq!(convert(42.0, Currency::BASE), 42.0);
    }

    #[test]
    fn format_has_symbol_and_two_decimals() {
        assert_eq!(format(1000.0, Currency::INR), "₹1000.00");
        assert_eq!(format(1000.0, Currency::USD), "$12.00");
        assert_eq!(format(1000.0, Currency::EUR), "€11.00");
        assert_eq!(format(0.0, Currency::USD), "$0.00");
        assert_eq!(format(12.3456, Currency::INR), "₹12.35");

        for currency in Currency::iter() {
            let text = format(777.7, currency);
            assert!(text.starts_with(currency.symbol()));
            let (_, decimals) = text.rsplit_once('.').unwrap();
            assert_eq!(decimals.len(), 2);
        }
    }

    #[test]
    fn trend_values_round_cleanly() {
        let values: Vec<f64> = [1000.0, 1500.0]
            .iter()
            .map(|amount| convert_rounded(*amount, Currency::USD))
            .collect();
        assert_eq!(values, vec![12.0, 18.0]);
    }

    #[test]
    fn large_amounts_format_instead_of_wrapping() {
        assert_eq!(format(1e17, Currency::INR), "₹100000000000000000.00");
        assert_eq!(format(-1e19, Currency::INR), "-₹10000000000000000000.00");
        assert_eq!(format(-2500.0, Currency::USD), "-$30.00");
        assert_eq!(convert_rounded(1e19, Currency::INR), 1e19);
    }

    #[test]
    fn free_functions_use_the_standard_table() {
        for currency in Currency::iter() {
            assert_eq!(STANDARD_RATES.rate(currency), currency.standard_rate());
        }
    }
}
