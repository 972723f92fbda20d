use crate::components::link_button::LinkButton;
use crate::components::pico::Grid;
use crate::hooks::use_translation::use_translation;
use crate::Route;
use dioxus::prelude::*;

const TRANSACTIONS_LOGO: Asset = asset!("/assets/transactions.svg");
const SETTINGS_LOGO: Asset = asset!("/assets/settings.svg");

#[allow(non_snake_case)]
#[component]
pub fn HomeScreen() -> Element {
    let t = use_translation("screens", "home");

    rsx! {
        Grid {
            LinkButton {
                to: Route::TransactionsScreen {}.to_string(),
                title: t.t("transactions"),
                description: t.t("transactions_description"),
                logo: TRANSACTIONS_LOGO.to_string(),
            }
            LinkButton {
                to: Route::SettingsScreen {}.to_string(),
                title: t.t("settings"),
                description: t.t("settings_description"),
                logo: SETTINGS_LOGO.to_string(),
            }
        }
    }
}
