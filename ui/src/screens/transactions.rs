//=============================================================================
// File: src/screens/transactions.rs
//=============================================================================
use crate::compat;
use crate::components::pico::Card;
use crate::components::transactions_table::TransactionsTable;
use crate::hooks::use_translation::use_translation;
use dioxus::prelude::*;
use std::time::Duration;

const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[allow(non_snake_case)]
#[component]
pub fn TransactionsScreen() -> Element {
    let t = use_translation("screens", "transactions");
    let mut transactions = use_resource(move || async move { api::transactions().await });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = transactions;
        async move {
            loop {
                compat::sleep(REFRESH_INTERVAL).await;
                res.restart();
            }
        }
    });

    let title = t.t("title");

    rsx! {
        match &*transactions.read() {
            None => rsx! {
                Card {
                    h3 { "{title}" }
                    TransactionsTable { loading: true }
                }
            },
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("failed to load transactions: {e}");
                let error = t.t("error");
                let retry = t.t("retry");
                rsx! {
                    Card {
                        h3 { "{title}" }
                        p { "{error}: {e}" }
                        button { onclick: move |_| transactions.restart(), "{retry}" }
                    }
                }
            }
            Some(Ok(list)) => rsx! {
                Card {
                    h3 { "{title}" }
                    TransactionsTable { transactions: list.clone() }
                }
            },
        }
    }
}
