use super::row::{DetailView, TreatmentExt};
use super::TreatmentIcon;
use crate::components::pico::Modal;
use crate::hooks::use_formatter::use_formatter;
use crate::hooks::use_translation::use_translation;
use api::transaction::Transaction;
use dioxus::prelude::*;

#[component]
fn DetailLine(label: String, value: String, #[props(default)] monospace: bool) -> Element {
    let value_style = if monospace {
        "font-family: monospace; word-break: break-all;"
    } else {
        ""
    };
    rsx! {
        div {
            class: "tx-detail-line",
            strong { "{label}" }
            p { style: "{value_style}", "{value}" }
        }
    }
}

/// Details for one transaction.
#[component]
pub fn TransactionModal(transaction: Transaction, is_open: Signal<bool>) -> Element {
    let table_t = use_translation("components", "transactions_table");
    let t = use_translation("components", "transaction_modal");
    let formatter = use_formatter();

    let detail = DetailView::new(&transaction, &table_t, &formatter, chrono::Utc::now());
    let row = detail.row;
    let amount_class = row.treatment.amount_class();
    let counterparty = match (&row.from, &row.to) {
        (Some(from), Some(to)) => Some(format!("{from} {to}")),
        (Some(one), None) | (None, Some(one)) => Some(one.clone()),
        (None, None) => None,
    };

    rsx! {
        Modal {
            is_open,
            title: row.label.clone(),
            close_label: t.t("close"),
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 0.5rem; margin-bottom: 1rem;",
                TreatmentIcon { treatment: row.treatment }
                p {
                    class: "{amount_class}",
                    style: "font-size: 1.5rem;",
                    "{row.amount}"
                }
                if let Some(fiat) = &row.fiat {
                    p { class: "tx-fiat", "{fiat}" }
                }
            }
            if let Some(counterparty) = counterparty {
                DetailLine { label: t.t("counterparty"), value: counterparty }
            }
            if let Some(date) = detail.date {
                DetailLine { label: t.t("date"), value: date }
            }
            if let Some(memo) = &row.memo {
                DetailLine { label: t.t("description"), value: memo.clone() }
            }
            if let Some(hash) = detail.payment_hash {
                DetailLine { label: t.t("payment_hash"), value: hash, monospace: true }
            }
            if let Some(preimage) = detail.preimage {
                DetailLine { label: t.t("preimage"), value: preimage, monospace: true }
            }
        }
    }
}
