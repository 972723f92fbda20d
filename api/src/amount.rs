//! Amount types and their locale-aware text rendering.

use std::fmt;

use crate::currency::DisplayCurrency;
use crate::currency::FiatCurrency;
use crate::prefs::locale::Locale;

/// A monetary value in a fiat currency.
///
/// Stored as a signed count of the currency's smallest unit (e.g. cents for
/// USD) so that rendering never suffers from float drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Creates a `FiatAmount` from a float, rounding to the nearest minor unit.
    ///
    /// # Examples
    /// ```
    /// use api::amount::FiatAmount;
    /// use api::currency::FiatCurrency;
    ///
    /// let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
    /// assert_eq!(amount.as_minor_units(), 12346);
    /// ```
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    /// Renders the amount with grouping, decimal separator and currency symbol
    /// placed the way `locale` expects, e.g. "$1,234.50" or "1.234,50 €".
    pub fn format(&self, locale: Locale) -> String {
        let decimals = self.currency.decimals() as u32;
        let divisor = 10_u64.pow(decimals);
        let magnitude = self.amount.unsigned_abs();
        let major = group_digits(magnitude / divisor, locale.group_separator());

        let number = if decimals == 0 {
            major
        } else {
            format!(
                "{}{}{:0width$}",
                major,
                locale.decimal_separator(),
                magnitude % divisor,
                width = decimals as usize
            )
        };

        let sign = if self.amount < 0 { "-" } else { "" };
        let symbol = self.currency.symbol();
        if locale.symbol_after_amount() {
            format!("{sign}{number} {symbol}")
        } else {
            format!("{sign}{symbol}{number}")
        }
    }
}

/// Plain numeric rendering, e.g. "25.34".
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.abs();

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

/// Inserts `separator` between every group of three digits.
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats a sat count, e.g. "21,000 sats" or "1 sat".
pub fn format_sats(sats: i64, locale: Locale) -> String {
    let grouped = group_digits(sats.unsigned_abs(), locale.group_separator());
    let sign = if sats < 0 { "-" } else { "" };
    let unit = if sats == 1 { "sat" } else { "sats" };
    format!("{sign}{grouped} {unit}")
}

/// Formats a transaction's display amount in its own currency.
///
/// `BTC` display amounts are sat counts and go through [`format_sats`].
pub fn format_in_currency(value: f64, currency: DisplayCurrency, locale: Locale) -> String {
    match currency {
        DisplayCurrency::Btc => format_sats(value.round() as i64, locale),
        DisplayCurrency::Fiat(fiat) => FiatAmount::new_from_float(value, fiat).format(locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_format_sats_plural() {
        assert_eq!(format_sats(21_000, Locale::En), "21,000 sats");
        assert_eq!(format_sats(0, Locale::En), "0 sats");
    }

    #[test]
    fn test_format_sats_singular() {
        assert_eq!(format_sats(1, Locale::En), "1 sat");
    }

    #[test]
    fn test_format_sats_spanish_grouping() {
        assert_eq!(format_sats(1_500_000, Locale::Es), "1.500.000 sats");
    }

    #[test]
    fn test_fiat_format_english() {
        let amt = FiatAmount::new_from_minor(123450, FiatCurrency::USD);
        assert_eq!(amt.format(Locale::En), "$1,234.50");
    }

    #[test]
    fn test_fiat_format_spanish() {
        let amt = FiatAmount::new_from_minor(123450, FiatCurrency::EUR);
        assert_eq!(amt.format(Locale::Es), "1.234,50 €");
    }

    #[test]
    fn test_fiat_format_zero_decimals() {
        let amt = FiatAmount::new_from_float(1500.4, FiatCurrency::JPY);
        assert_eq!(amt.format(Locale::En), "¥1,500");
    }

    #[test]
    fn test_fiat_format_negative() {
        let amt = FiatAmount::new_from_minor(-5, FiatCurrency::USD);
        assert_eq!(amt.format(Locale::En), "-$0.05");
        assert_eq!(amt.to_string(), "-0.05");
    }

    #[test]
    fn test_format_in_currency_btc_uses_sats() {
        assert_eq!(
            format_in_currency(2100.0, DisplayCurrency::Btc, Locale::En),
            "2,100 sats"
        );
    }

    #[test]
    fn test_format_in_currency_fiat_rounds() {
        assert_eq!(
            format_in_currency(0.126, DisplayCurrency::Fiat(FiatCurrency::USD), Locale::En),
            "$0.13"
        );
    }
}
