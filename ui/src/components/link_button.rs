use dioxus::prelude::*;

/// A navigation card: logo, title and optional description, linking to `to`.
#[component]
pub fn LinkButton(
    to: String,
    title: String,
    #[props(optional)] description: Option<String>,
    #[props(optional)] logo: Option<String>,
) -> Element {
    rsx! {
        Link {
            to,
            class: "link-button",
            div {
                class: "link-button-card",
                div {
                    style: "margin: 3rem 0;",
                    if let Some(logo) = logo {
                        img {
                            src: "{logo}",
                            alt: "logo",
                            width: "135",
                            height: "110",
                            style: "display: inline; border-radius: 1.5rem;",
                        }
                    }
                }
                div {
                    span {
                        style: "display: block; font-size: 1.125rem;",
                        "{title}"
                    }
                    if let Some(description) = description {
                        span {
                            style: "font-size: 0.875rem; color: var(--muted-color);",
                            "{description}"
                        }
                    }
                }
            }
        }
    }
}
