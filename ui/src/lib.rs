// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod i18n;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use hooks::use_translation::use_translation;
use i18n::Catalogs;
use screens::home::HomeScreen;
use screens::settings::SettingsScreen;
use screens::transactions::TransactionsScreen;

/// The screens of the app and the paths they live at.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        HomeScreen {},
        #[route("/transactions")]
        TransactionsScreen {},
        #[route("/settings")]
        SettingsScreen {},
}

const APP_CSS: &str = r#"
    * { box-sizing: border-box; }

    :root {
        --background-color: #f9fafb;
        --card-background-color: #ffffff;
        --card-border-color: #e5e7eb;
        --text-color: #111827;
        --muted-color: #6b7280;
        --hover-color: #f3f4f6;
    }

    @media (prefers-color-scheme: dark) {
        :root {
            --background-color: #121212;
            --card-background-color: #1e1e1e;
            --card-border-color: #2c2c2c;
            --text-color: #ffffff;
            --muted-color: #a3a3a3;
            --hover-color: #242424;
        }
    }

    html, body {
        margin: 0;
        padding: 0;
        font-family: system-ui, sans-serif;
        color: var(--text-color);
        background-color: var(--background-color);
    }

    a { color: inherit; text-decoration: none; }
    p { margin: 0; }

    .container { max-width: 960px; margin: 0 auto; padding: 0 1rem; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1rem; }

    article {
        background-color: var(--card-background-color);
        border: 1px solid var(--card-border-color);
        border-radius: 0.5rem;
        padding: 1rem;
        margin-bottom: 1rem;
    }

    header nav { display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; }
    header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
    header nav a.active-tab { font-weight: bold; border-bottom: 2px solid currentColor; }

    /* --- LINK BUTTON --- */
    .link-button { display: block; }
    .link-button-card {
        padding: 1rem;
        height: 24rem;
        text-align: center;
        overflow: hidden;
        background-color: var(--card-background-color);
        border: 1px solid var(--card-border-color);
        border-radius: 0.5rem;
        box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        transition: background-color 200ms;
    }
    .link-button-card:hover { background-color: var(--hover-color); }

    /* --- TRANSACTIONS --- */
    .tx-row {
        margin: 0 -0.5rem;
        padding: 0.5rem;
        cursor: pointer;
        border-radius: 0.375rem;
    }
    .tx-row:hover { background-color: var(--hover-color); }

    .tx-icon {
        display: flex;
        justify-content: center;
        align-items: center;
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        flex-shrink: 0;
    }
    .tx-glyph { width: 1.25rem; height: 1.25rem; }
    .rotate-45 { transform: rotate(45deg); }
    .tx-icon-incoming { background-color: #dcfce7; color: #22c55e; }
    .tx-icon-outgoing { background-color: #ffedd5; color: #f97316; }
    .tx-icon-pending { background-color: #dbeafe; color: #3b82f6; }
    .tx-icon-failed { background-color: #fee2e2; color: #ef4444; }

    .tx-label { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
    .tx-time { font-size: 0.75rem; color: var(--muted-color); }
    .tx-memo { font-size: 0.75rem; color: var(--muted-color); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
    .tx-empty { color: var(--muted-color); text-align: center; }

    .tx-amount { font-size: 0.875rem; }
    .tx-amount-incoming { color: #16a34a; }
    .tx-amount-outgoing { color: #ea580c; }
    .tx-amount-failed { color: #dc2626; }
    .tx-fiat { font-size: 0.75rem; color: var(--muted-color); }

    .tx-detail-line { padding: 0.25rem 0; }

    .pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
    @keyframes pulse { 50% { opacity: 0.5; } }

    .loading-spinner {
        width: 2rem;
        height: 2rem;
        border: 3px solid var(--card-border-color);
        border-top-color: var(--muted-color);
        border-radius: 9999px;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }

    /* --- DIALOG --- */
    dialog[open] {
        position: fixed;
        inset: 0;
        width: 100%;
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        border: none;
        background: rgba(0,0,0,0.5);
    }
    dialog article { width: min(32rem, 100%); }
    dialog header { display: flex; flex-direction: row-reverse; justify-content: space-between; align-items: center; }
    dialog a.close::after { content: "\2715"; }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(api::get_user_prefs)?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
            rsx! {
                LoadedApp {
                    user_prefs: *prefs,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    let app_state = use_hook(|| {
        let catalogs = Catalogs::bundled().unwrap_or_else(|e| {
            dioxus_logger::tracing::error!("translations unavailable: {e}");
            Catalogs::default()
        });
        AppState::new(catalogs)
    });
    use_context_provider(|| app_state.clone());

    let prefs_signal = use_signal(|| user_prefs);
    use_context_provider(|| AppStateMut {
        prefs: prefs_signal,
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn NavBar() -> Element {
    let home_t = use_translation("screens", "home");
    let wallet = home_t.t("title");
    let transactions = home_t.t("transactions");
    let settings = home_t.t("settings");

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                Link {
                                    to: Route::HomeScreen {},
                                    strong { "{wallet}" }
                                }
                            }
                        }
                        ul {
                            li {
                                Link {
                                    to: Route::TransactionsScreen {},
                                    active_class: "active-tab",
                                    "{transactions}"
                                }
                            }
                            li {
                                Link {
                                    to: Route::SettingsScreen {},
                                    active_class: "active-tab",
                                    "{settings}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
