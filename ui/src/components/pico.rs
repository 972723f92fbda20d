//! Small layout components styled by the app stylesheet.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid of equally sized cells.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Dialogs
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    #[props(default = "Close".to_string())]
    close_label: String,
    children: Element,
}

/// A dialog with a title bar. Closes from the close link, a click on the
/// backdrop, or the Escape key.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                // clicks inside the article must not reach the backdrop.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "{props.close_label}",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
