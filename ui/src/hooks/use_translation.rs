use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::i18n::Translator;
use dioxus::prelude::*;

/// Returns a translator for `namespace.key_prefix` in the user's current
/// language. Components calling this re-render when the language changes.
pub fn use_translation(namespace: &str, key_prefix: &str) -> Translator {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();

    Translator::new(
        app_state.catalogs.clone(),
        app_state_mut.locale(),
        namespace,
        key_prefix,
    )
}
