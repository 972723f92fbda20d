//! The user interface language and its number formatting conventions.

use serde::Deserialize;
use serde::Serialize;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Language tag, e.g. "en".
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// The language's name in itself, for language pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Self::En => ',',
            Self::Es => '.',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::En => '.',
            Self::Es => ',',
        }
    }

    /// Whether a currency symbol trails the number ("1,50 €") instead of
    /// leading it ("€1.50").
    pub fn symbol_after_amount(&self) -> bool {
        matches!(self, Self::Es)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_tag() {
        assert_eq!(Locale::from_str("es"), Ok(Locale::Es));
        assert_eq!(Locale::from_str("EN"), Ok(Locale::En));
        assert!(Locale::from_str("fr").is_err());
    }

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(Locale::Es.tag(), "es");
        assert_eq!(Locale::from_str(Locale::En.tag()), Ok(Locale::En));
    }

    #[test]
    fn test_separators() {
        assert_eq!(Locale::En.group_separator(), ',');
        assert_eq!(Locale::Es.decimal_separator(), ',');
        assert!(Locale::Es.symbol_after_amount());
        assert!(!Locale::En.symbol_after_amount());
    }
}
