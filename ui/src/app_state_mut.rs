//! Defines the mutable, reactive state for the application's UI.

use api::amount::format_in_currency;
use api::amount::format_sats;
use api::currency::DisplayCurrency;
use api::prefs::locale::Locale;
use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;

/// Formats amounts the way the user's settings ask for.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Formatter {
    locale: Locale,
    show_fiat: bool,
}

impl Formatter {
    pub fn new(prefs: &UserPrefs) -> Self {
        Self {
            locale: prefs.locale(),
            show_fiat: prefs.show_fiat(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn show_fiat(&self) -> bool {
        self.show_fiat
    }

    pub fn formatted_sats(&self, sats: i64) -> String {
        format_sats(sats, self.locale)
    }

    pub fn formatted_in_currency(&self, value: f64, currency: DisplayCurrency) -> String {
        format_in_currency(value, currency, self.locale)
    }
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Holds `Signal`s for settings the user can change at runtime, so that
/// every component formatting amounts or text re-renders when they change.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub prefs: Signal<UserPrefs>,
}

impl AppStateMut {
    pub fn formatter(&self) -> Formatter {
        Formatter::new(&self.prefs.read())
    }

    pub fn locale(&self) -> Locale {
        self.prefs.read().locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::currency::FiatCurrency;

    #[test]
    fn test_formatter_sats() {
        let f = Formatter::new(&UserPrefs::new(Locale::En, true));
        assert_eq!(f.formatted_sats(12_345), "12,345 sats");
    }

    #[test]
    fn test_formatter_in_currency_follows_locale() {
        let f = Formatter::new(&UserPrefs::new(Locale::Es, true));
        assert_eq!(
            f.formatted_in_currency(12.5, DisplayCurrency::Fiat(FiatCurrency::EUR)),
            "12,50 €"
        );
        assert_eq!(f.formatted_in_currency(1000.0, DisplayCurrency::Btc), "1.000 sats");
    }
}
