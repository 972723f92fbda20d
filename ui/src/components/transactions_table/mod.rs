//! The wallet's payment history list.

mod row;
mod transaction_modal;

use crate::components::icons::{ArrowDownIcon, ArrowUpIcon, CrossIcon};
use crate::components::loading::Loading;
use crate::hooks::use_formatter::use_formatter;
use crate::hooks::use_translation::use_translation;
use api::transaction::Transaction;
use api::transaction::Treatment;
use dioxus::prelude::*;
use row::{RowView, TreatmentExt};
use transaction_modal::TransactionModal;

const NBSP: char = '\u{a0}';

/// What the table shows in place of rows, if anything.
#[derive(Clone, PartialEq, Debug)]
enum TableBody {
    Loading,
    Empty(String),
    Rows(Vec<Transaction>),
}

impl TableBody {
    /// `loading` wins over any data; no list and an empty list both show the
    /// message, preferring `no_result_msg` over `default_msg`.
    fn new(
        transactions: Option<Vec<Transaction>>,
        loading: bool,
        no_result_msg: Option<String>,
        default_msg: impl FnOnce() -> String,
    ) -> Self {
        if loading {
            return Self::Loading;
        }
        match transactions {
            Some(list) if !list.is_empty() => Self::Rows(list),
            _ => Self::Empty(no_result_msg.unwrap_or_else(default_msg)),
        }
    }
}

#[component]
pub fn TreatmentIcon(treatment: Treatment) -> Element {
    let class = treatment.icon_class();
    rsx! {
        div {
            class: "{class}",
            match treatment {
                Treatment::Incoming => rsx! { ArrowDownIcon { class: "tx-glyph" } },
                Treatment::OutgoingPending => rsx! { ArrowUpIcon { class: "tx-glyph rotate-45" } },
                Treatment::OutgoingFailed => rsx! { CrossIcon { class: "tx-glyph" } },
                Treatment::OutgoingSettled => rsx! { ArrowUpIcon { class: "tx-glyph" } },
            }
        }
    }
}

/// A single clickable history row.
#[component]
fn TransactionRow(row: RowView, on_select: EventHandler<MouseEvent>) -> Element {
    let label_class = row.label_class();
    let amount_class = row.treatment.amount_class();

    rsx! {
        div {
            class: "tx-row",
            onclick: move |evt| on_select.call(evt),
            div {
                style: "display: flex; gap: 0.75rem; align-items: center;",
                TreatmentIcon { treatment: row.treatment }
                div {
                    style: "overflow: hidden; margin-right: 0.75rem;",
                    div {
                        style: "display: flex; gap: 0.5rem; align-items: center; font-size: 0.875rem; font-weight: 500;",
                        p {
                            class: "{label_class}",
                            "{row.label}"
                            if let Some(from) = &row.from {
                                "{NBSP}{from}"
                            }
                            if let Some(to) = &row.to {
                                "{NBSP}{to}"
                            }
                        }
                        if let Some(time_ago) = &row.time_ago {
                            p {
                                class: "tx-time",
                                "{time_ago}"
                            }
                        }
                    }
                    if let Some(memo) = &row.memo {
                        p {
                            class: "tx-memo",
                            "{memo}"
                        }
                    }
                }
                div {
                    style: "display: flex; margin-left: auto; text-align: right; flex-shrink: 0;",
                    div {
                        p {
                            class: "{amount_class}",
                            "{row.amount}"
                        }
                        if let Some(fiat) = &row.fiat {
                            p {
                                class: "tx-fiat",
                                "{fiat}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Lists transactions, or a spinner while `loading`, or a message when there
/// are none. Selecting a row opens its details in a dialog.
#[component]
pub fn TransactionsTable(
    transactions: Option<Vec<Transaction>>,
    #[props(default)] loading: bool,
    #[props(optional)] no_result_msg: Option<String>,
) -> Element {
    let t = use_translation("components", "transactions_table");
    let formatter = use_formatter();
    let mut modal_open = use_signal(|| false);
    let mut selected = use_signal(|| None::<Transaction>);

    let now = chrono::Utc::now();

    let body = match TableBody::new(transactions, loading, no_result_msg, || {
        t.t("no_transactions")
    }) {
        TableBody::Loading => rsx! {
            div {
                style: "width: 100%; display: flex; flex-direction: column; align-items: center;",
                Loading {}
            }
        },
        TableBody::Empty(message) => rsx! {
            p {
                class: "tx-empty",
                "{message}"
            }
        },
        TableBody::Rows(transactions) => rsx! {
            {transactions.into_iter().map(|tx| {
                let row = RowView::new(&tx, &t, &formatter, now);
                let key = row.id.clone();
                rsx! {
                    TransactionRow {
                        key: "{key}",
                        row,
                        on_select: move |_| {
                            dioxus_logger::tracing::debug!("opening details for {}", tx.id);
                            selected.set(Some(tx.clone()));
                            modal_open.set(true);
                        },
                    }
                }
            })}
            if let Some(transaction) = selected() {
                TransactionModal {
                    transaction,
                    is_open: modal_open,
                }
            }
        },
    };

    rsx! {
        div { {body} }
    }
}
