use super::locale::Locale;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    locale: Locale,
    show_fiat: bool,
}

impl UserPrefs {
    pub fn new(locale: Locale, show_fiat: bool) -> Self {
        Self { locale, show_fiat }
    }

    /// Builds prefs from environment variables, falling back to in-code defaults.
    ///
    /// # Environment Variables
    /// - `WALLET_LOCALE`: "en" or "es".
    /// - `WALLET_SHOW_FIAT`: "true"/"1" to show fiat equivalents under amounts.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = lookup("WALLET_LOCALE")
            .and_then(|s| Locale::from_str(&s).ok())
            .unwrap_or_default();

        let show_fiat = lookup("WALLET_SHOW_FIAT")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(true);

        Self { locale, show_fiat }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn show_fiat(&self) -> bool {
        self.show_fiat
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_show_fiat(&mut self, show_fiat: bool) {
        self.show_fiat = show_fiat;
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_from(vars: &[(&str, &str)]) -> UserPrefs {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let prefs = prefs_from(&[]);
        assert_eq!(prefs.locale(), Locale::En);
        assert!(prefs.show_fiat());
    }

    #[test]
    fn test_reads_all_variables() {
        let prefs = prefs_from(&[
            ("WALLET_LOCALE", "ES"),
            ("WALLET_SHOW_FIAT", "false"),
        ]);
        assert_eq!(prefs.locale(), Locale::Es);
        assert!(!prefs.show_fiat());
    }

    #[test]
    fn test_invalid_locale_falls_back() {
        let prefs = prefs_from(&[("WALLET_LOCALE", "klingon")]);
        assert_eq!(prefs.locale(), Locale::En);
    }

    #[test]
    fn test_setters() {
        let mut prefs = UserPrefs::new(Locale::En, true);
        prefs.set_locale(Locale::Es);
        prefs.set_show_fiat(false);
        assert_eq!(prefs, UserPrefs::new(Locale::Es, false));
    }

    #[test]
    fn test_show_fiat_accepts_one() {
        assert!(prefs_from(&[("WALLET_SHOW_FIAT", "1")]).show_fiat());
        assert!(!prefs_from(&[("WALLET_SHOW_FIAT", "0")]).show_fiat());
    }
}
