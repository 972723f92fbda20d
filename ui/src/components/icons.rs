//! Inline SVG icons for transaction directions.

use dioxus::prelude::*;

#[component]
pub fn ArrowUpIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            class: "{class}",
            path { d: "M12 3.5 4.5 11h5v9.5h5V11h5z" }
        }
    }
}

#[component]
pub fn ArrowDownIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            class: "{class}",
            path { d: "M12 20.5 19.5 13h-5V3.5h-5V13h-5z" }
        }
    }
}

#[component]
pub fn CrossIcon(#[props(default)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "currentColor",
            class: "{class}",
            path { d: "M6.4 4.9 4.9 6.4 10.5 12l-5.6 5.6 1.5 1.5 5.6-5.6 5.6 5.6 1.5-1.5-5.6-5.6 5.6-5.6-1.5-1.5-5.6 5.6z" }
        }
    }
}
