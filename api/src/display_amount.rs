//! Provides a self-contained type for amounts that are ready to be displayed.

use std::fmt;

use thiserror::Error;

use crate::currency::Currency;

/// An error that can occur when parsing a string into a `DisplayAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is empty or not a number (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string has more decimal places than the currency supports (e.g., "1.234").
    #[error("too many decimal places for the currency")]
    TooManyDecimals,
}

/// A monetary value in a specific currency, rounded to that currency's
/// smallest unit.
///
/// The amount is stored as a signed integer count of minor units (e.g. paise
/// or cents), so formatting never shows floating-point noise such as
/// `12.000000000000002`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAmount {
    amount: i64,
    currency: Currency,
}

impl DisplayAmount {
    /// Returns the raw amount in the currency's smallest unit.
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Returns the rounded amount as a float, e.g. for chart data.
    pub fn as_f64(&self) -> f64 {
        self.amount as f64 / Self::multiplier(self.currency) as f64
    }

    fn multiplier(currency: Currency) -> i64 {
        10_i64.pow(currency.decimals() as u32)
    }

    /// Creates a `DisplayAmount` from a floating-point value, rounding to the
    /// nearest minor unit.
    ///
    /// Returns `None` when the value is not finite or has more minor units
    /// than an `i64` can hold.
    ///
    /// # Examples
    /// ```
    /// use api::currency::Currency;
    /// use api::display_amount::DisplayAmount;
    ///
    /// let amount = DisplayAmount::try_from_float(123.456, Currency::USD).unwrap();
    /// assert_eq!(amount.as_minor_units(), 12346);
    /// assert!(DisplayAmount::try_from_float(1e17, Currency::USD).is_none());
    /// ```
    pub fn try_from_float(value: f64, currency: Currency) -> Option<Self> {
        let scaled = (value * Self::multiplier(currency) as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which itself does not fit.
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self {
            amount: scaled as i64,
            currency,
        })
    }

    /// Creates a new `DisplayAmount` directly from its smallest unit.
    pub fn new_from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Parses user input such as `"250"`, `"99.5"` or `".75"`.
    ///
    /// # Examples
    /// ```
    /// use api::currency::Currency;
    /// use api::display_amount::{DisplayAmount, ParseAmountError};
    ///
    /// let amount = DisplayAmount::new_from_str("123.45", Currency::INR).unwrap();
    /// assert_eq!(amount.as_minor_units(), 12345);
    ///
    /// let err = DisplayAmount::new_from_str("1.234", Currency::INR).unwrap_err();
    /// assert_eq!(err, ParseAmountError::TooManyDecimals);
    /// ```
    pub fn new_from_str(s: &str, currency: Currency) -> Result<Self, ParseAmountError> {
        let decimals = currency.decimals() as u32;
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseAmountError::InvalidFormat);
        }
        if !major_str
            .chars()
            .chain(minor_str.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(ParseAmountError::InvalidFormat);
        }
        if minor_str.len() > decimals as usize {
            return Err(ParseAmountError::TooManyDecimals);
        }

        let parse = |digits: &str| -> Result<i64, ParseAmountError> {
            if digits.is_empty() {
                Ok(0)
            } else {
                digits
                    .parse::<i64>()
                    .map_err(|_| ParseAmountError::InvalidFormat)
            }
        };
        let major_units = parse(major_str)?;
        let minor_units = parse(minor_str)?;

        let scaling_factor = 10_i64.pow(decimals - minor_str.len() as u32);
        let total_minor_units = major_units
            .checked_mul(Self::multiplier(currency))
            .and_then(|major| {
                minor_units
                    .checked_mul(scaling_factor)
                    .and_then(|minor| major.checked_add(minor))
            })
            .ok_or(ParseAmountError::InvalidFormat)?;

        let amount = if is_negative {
            -total_minor_units
        } else {
            total_minor_units
        };
        Ok(Self::new_from_minor(amount, currency))
    }

    /// Formats the amount with its currency symbol (e.g., "$25.34", "-€0.50").
    pub fn to_string_with_symbol(&self) -> String {
        let plain = self.to_string();
        match plain.strip_prefix('-') {
            Some(magnitude) => format!("-{}{}", self.currency.symbol(), magnitude),
            None => format!("{}{}", self.currency.symbol(), plain),
        }
    }
}

/// Formats the amount as a plain numeric string (e.g., "25.34").
impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.unsigned_abs();

        if decimals == 0 {
            return write!(f, "{}{}", sign, magnitude);
        }

        let divisor = 10_u64.pow(decimals as u32);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = decimals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rounds_to_minor_units() {
        let amount = DisplayAmount::try_from_float(1000.0 * 0.012, Currency::USD).unwrap();
        assert_eq!(amount.as_minor_units(), 1200);
        assert_eq!(amount.to_string(), "12.00");
        assert_eq!(amount.as_f64(), 12.0);
    }

    #[test]
    fn negative_fractions_keep_their_sign() {
        let amount = DisplayAmount::new_from_minor(-50, Currency::EUR);
        assert_eq!(amount.to_string(), "-0.50");
        assert_eq!(amount.to_string_with_symbol(), "-€0.50");
    }

    #[test]
    fn symbol_form() {
        let amount = DisplayAmount::new_from_minor(2534, Currency::USD);
        assert_eq!(amount.to_string_with_symbol(), "$25.34");
    }

    #[test]
    fn extreme_minor_units_format_without_overflow() {
        let lowest = DisplayAmount::new_from_minor(i64::MIN, Currency::INR);
        assert_eq!(lowest.to_string_with_symbol(), "-₹92233720368547758.08");
        let highest = DisplayAmount::new_from_minor(i64::MAX, Currency::INR);
        assert_eq!(highest.to_string_with_symbol(), "₹92233720368547758.07");
    }

    #[test]
    fn floats_outside_the_integer_range_are_refused() {
        assert!(DisplayAmount::try_from_float(1e17, Currency::INR).is_none());
        assert!(DisplayAmount::try_from_float(-1e19, Currency::INR).is_none());
        assert!(DisplayAmount::try_from_float(f64::NAN, Currency::INR).is_none());
        assert!(DisplayAmount::try_from_float(f64::INFINITY, Currency::INR).is_none());
        let large = DisplayAmount::try_from_float(1e15, Currency::INR).unwrap();
        assert_eq!(large.as_minor_units(), 100_000_000_000_000_000);
    }

    #[test]
    fn parses_user_input() {
        let parse = |s| DisplayAmount::new_from_str(s, Currency::INR);
        assert_eq!(parse("250").unwrap().as_minor_units(), 25000);
        assert_eq!(parse("99.5").unwrap().as_minor_units(), 9950);
        assert_eq!(parse(".75").unwrap().as_minor_units(), 75);
        assert_eq!(parse(" 12 ").unwrap().as_minor_units(), 1200);
        assert_eq!(parse("-3").unwrap().as_minor_units(), -300);
    }

    #[test]
    fn rejects_malformed_input() {
        let parse = |s| DisplayAmount::new_from_str(s, Currency::INR);
        assert_eq!(parse(""), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse("."), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse("1.2.3"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse("+5"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse("1.234"), Err(ParseAmountError::TooManyDecimals));
    }
}
