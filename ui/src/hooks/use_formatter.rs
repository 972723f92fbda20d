use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Formatter;
use dioxus::prelude::*;

pub fn use_formatter() -> Formatter {
    use_context::<AppStateMut>().formatter()
}
