//! Currencies that a wallet amount can be displayed in.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// The code used by wallet backends for bitcoin-denominated display amounts.
pub const BTC_CODE: &str = "BTC";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);

/// A fiat currency the wallet knows how to format.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    EUR,
    GBP,
    INR,
    JPY,
    KRW,
    KWD,
    MXN,
    #[default]
    USD,
    ZAR,
}

impl FiatCurrency {
    /// Number of minor-unit digits. JPY and KRW have none, KWD has three.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::KRW => 0,
            Self::KWD => 3,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "A$",
            Self::BRL => "R$",
            Self::CAD => "CA$",
            Self::CHF => "CHF",
            Self::CNY => "CN¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::KRW => "₩",
            Self::KWD => "KD",
            Self::MXN => "MX$",
            Self::USD => "$",
            Self::ZAR => "R",
        }
    }

    /// ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// The currency half of a transaction's `displayAmount` pair.
///
/// Wallet backends send either `"BTC"` (the amount is then in sats) or a fiat
/// ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayCurrency {
    Btc,
    Fiat(FiatCurrency),
}

impl DisplayCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Btc => BTC_CODE,
            Self::Fiat(fiat) => fiat.code(),
        }
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DisplayCurrency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(BTC_CODE) {
            return Ok(Self::Btc);
        }
        FiatCurrency::from_str(s)
            .map(Self::Fiat)
            .map_err(|_| UnknownCurrency(s.to_string()))
    }
}

impl TryFrom<String> for DisplayCurrency {
    type Error = UnknownCurrency;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayCurrency> for String {
    fn from(value: DisplayCurrency) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_currency_parses_btc_case_insensitive() {
        assert_eq!("BTC".parse::<DisplayCurrency>(), Ok(DisplayCurrency::Btc));
        assert_eq!("btc".parse::<DisplayCurrency>(), Ok(DisplayCurrency::Btc));
    }

    #[test]
    fn test_display_currency_parses_fiat() {
        assert_eq!(
            "eur".parse::<DisplayCurrency>(),
            Ok(DisplayCurrency::Fiat(FiatCurrency::EUR))
        );
    }

    #[test]
    fn test_display_currency_rejects_unknown_code() {
        assert_eq!(
            "XYZ".parse::<DisplayCurrency>(),
            Err(UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_display_currency_serde_uses_code() {
        let json = serde_json::to_string(&DisplayCurrency::Fiat(FiatCurrency::JPY)).unwrap();
        assert_eq!(json, "\"JPY\"");
        let back: DisplayCurrency = serde_json::from_str("\"BTC\"").unwrap();
        assert_eq!(back, DisplayCurrency::Btc);
    }

    #[test]
    fn test_fiat_decimals() {
        assert_eq!(FiatCurrency::USD.decimals(), 2);
        assert_eq!(FiatCurrency::JPY.decimals(), 0);
        assert_eq!(FiatCurrency::KWD.decimals(), 3);
    }
}
