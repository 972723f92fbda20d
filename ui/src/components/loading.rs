use dioxus::prelude::*;

/// An indeterminate spinner.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "loading-spinner",
            role: "status",
            "aria-busy": "true",
        }
    }
}
