use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::hooks::use_translation::use_translation;
use crate::Route;
use api::prefs::locale::Locale;
use dioxus::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[allow(non_snake_case)]
#[component]
pub fn SettingsScreen() -> Element {
    let t = use_translation("screens", "settings");
    let mut app_state_mut = use_context::<AppStateMut>();
    let prefs = *app_state_mut.prefs.read();

    let title = t.t("title");
    let language = t.t("language");
    let show_fiat = t.t("show_fiat");
    let back = t.t("back");

    rsx! {
        Card {
            h3 { "{title}" }
            label {
                "{language}"
                select {
                    onchange: move |evt| {
                        match Locale::from_str(&evt.value()) {
                            Ok(locale) => {
                                dioxus_logger::tracing::info!("language set to {}", locale.tag());
                                app_state_mut.prefs.write().set_locale(locale);
                            }
                            Err(e) => dioxus_logger::tracing::warn!("ignoring language {}: {e}", evt.value()),
                        }
                    },
                    for locale in Locale::iter() {
                        option {
                            value: "{locale.tag()}",
                            selected: locale == prefs.locale(),
                            "{locale.native_name()}"
                        }
                    }
                }
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: prefs.show_fiat(),
                    onchange: move |evt| app_state_mut.prefs.write().set_show_fiat(evt.checked()),
                }
                "{show_fiat}"
            }
            Link {
                to: Route::HomeScreen {},
                "{back}"
            }
        }
    }
}
