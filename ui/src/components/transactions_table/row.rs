//! Everything a history row or the detail dialog shows, computed up front so
//! the components only lay it out.

use crate::app_state_mut::Formatter;
use crate::i18n::Translator;
use api::transaction::Transaction;
use api::transaction::Treatment;
use chrono::DateTime;
use chrono::Utc;

/// CSS classes for each treatment.
pub trait TreatmentExt {
    fn icon_class(&self) -> &'static str;
    fn amount_class(&self) -> &'static str;
}

impl TreatmentExt for Treatment {
    fn icon_class(&self) -> &'static str {
        match self {
            Treatment::Incoming => "tx-icon tx-icon-incoming",
            Treatment::OutgoingSettled => "tx-icon tx-icon-outgoing",
            Treatment::OutgoingPending => "tx-icon tx-icon-pending pulse",
            Treatment::OutgoingFailed => "tx-icon tx-icon-failed",
        }
    }

    fn amount_class(&self) -> &'static str {
        match self {
            Treatment::Incoming => "tx-amount tx-amount-incoming",
            Treatment::OutgoingFailed => "tx-amount tx-amount-failed",
            Treatment::OutgoingSettled | Treatment::OutgoingPending => {
                "tx-amount tx-amount-outgoing"
            }
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RowView {
    pub id: String,
    pub treatment: Treatment,
    pub label: String,
    pub pending: bool,
    pub from: Option<String>,
    pub to: Option<String>,
    pub time_ago: Option<String>,
    pub memo: Option<String>,
    /// Signed amount, e.g. "- 1,000 sats".
    pub amount: String,
    /// Fiat equivalent prefixed with "~", when known and enabled.
    pub fiat: Option<String>,
}

impl RowView {
    pub fn new(tx: &Transaction, t: &Translator, fmt: &Formatter, now: DateTime<Utc>) -> Self {
        let formatted = match tx.display_amount {
            Some((value, currency)) => fmt.formatted_in_currency(value, currency),
            None => fmt.formatted_sats(tx.total_amount),
        };

        let time_ago = tx.time_ago.clone().or_else(|| {
            tx.timestamp
                .and_then(|ts| api::time_ago::time_ago(ts, now, fmt.locale()))
        });

        let fiat = if fmt.show_fiat() {
            tx.fiat_equivalent().map(|f| format!("~{f}"))
        } else {
            None
        };

        Self {
            id: tx.id.clone(),
            treatment: tx.treatment(),
            label: t.t(tx.label().key()),
            pending: tx.is_pending(),
            from: tx.from_text(),
            to: tx.to_text(),
            time_ago,
            memo: tx.memo().map(str::to_string),
            amount: format!("{} {}", tx.sign(), formatted),
            fiat,
        }
    }

    pub fn label_class(&self) -> &'static str {
        if self.pending {
            "tx-label pulse"
        } else {
            "tx-label"
        }
    }
}

/// The extra fields the detail dialog shows beyond the row.
#[derive(Clone, PartialEq, Debug)]
pub struct DetailView {
    pub row: RowView,
    pub date: Option<String>,
    pub payment_hash: Option<String>,
    pub preimage: Option<String>,
}

impl DetailView {
    pub fn new(tx: &Transaction, t: &Translator, fmt: &Formatter, now: DateTime<Utc>) -> Self {
        let date = tx
            .timestamp
            .and_then(DateTime::from_timestamp_millis)
            .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string());

        Self {
            row: RowView::new(tx, t, fmt, now),
            date,
            payment_hash: tx.payment_hash.clone().filter(|s| !s.is_empty()),
            preimage: tx.preimage.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalogs;
    use api::currency::DisplayCurrency;
    use api::currency::FiatCurrency;
    use api::prefs::locale::Locale;
    use api::prefs::user_prefs::UserPrefs;
    use api::transaction::TransactionState;
    use api::transaction::TransactionType;
    use std::sync::Arc;

    fn translator(locale: Locale) -> Translator {
        Translator::new(
            Arc::new(Catalogs::bundled().unwrap()),
            locale,
            "components",
            "transactions_table",
        )
    }

    fn formatter(locale: Locale, show_fiat: bool) -> Formatter {
        Formatter::new(&UserPrefs::new(locale, show_fiat))
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn tx_json(json: &str) -> Transaction {
        serde_json::from_str(json).unwrap()
    }

    fn row(tx: &Transaction) -> RowView {
        RowView::new(tx, &translator(Locale::En), &formatter(Locale::En, true), now())
    }

    // ==================== label and amount tests ====================

    #[test]
    fn test_received_row() {
        let tx = tx_json(
            r#"{"id":"1","type":"received","state":"settled","totalAmount":21000,
                "timeAgo":"3 days ago","totalAmountFiat":"$8.40",
                "metadata":{"payer_data":{"name":"Hal"}}}"#,
        );
        let r = row(&tx);
        assert_eq!(r.label, "Received");
        assert_eq!(r.treatment, Treatment::Incoming);
        assert_eq!(r.amount, "+ 21,000 sats");
        assert_eq!(r.from.as_deref(), Some("from Hal"));
        assert_eq!(r.time_ago.as_deref(), Some("3 days ago"));
        assert_eq!(r.fiat.as_deref(), Some("~$8.40"));
        assert_eq!(r.treatment.amount_class(), "tx-amount tx-amount-incoming");
    }

    #[test]
    fn test_pending_outgoing_row() {
        let mut tx = tx_json(r#"{"id":"2","type":"sent","totalAmount":500}"#);
        tx.state = Some(TransactionState::Pending);
        let r = row(&tx);
        assert_eq!(r.label, "Sending");
        assert!(r.pending);
        assert_eq!(r.label_class(), "tx-label pulse");
        assert_eq!(r.amount, "- 500 sats");
        assert_eq!(r.treatment.icon_class(), "tx-icon tx-icon-pending pulse");
    }

    #[test]
    fn test_failed_outgoing_row() {
        let tx = tx_json(
            r#"{"id":"3","type":"sent","state":"failed","totalAmount":1,
                "metadata":{"recipient_data":{"identifier":"bob@example.com"}}}"#,
        );
        let r = row(&tx);
        assert_eq!(r.label, "Failed");
        assert_eq!(r.to.as_deref(), Some("payment to bob@example.com"));
        assert_eq!(r.amount, "- 1 sat");
        assert_eq!(r.treatment.amount_class(), "tx-amount tx-amount-failed");
    }

    #[test]
    fn test_display_amount_takes_precedence() {
        let mut tx = tx_json(r#"{"id":"4","type":"sent","state":"settled","totalAmount":1000}"#);
        tx.display_amount = Some((4.2, DisplayCurrency::Fiat(FiatCurrency::USD)));
        assert_eq!(row(&tx).amount, "- $4.20");
    }

    #[test]
    fn test_spanish_row() {
        let tx = tx_json(r#"{"id":"5","type":"received","totalAmount":1500}"#);
        let r = RowView::new(&tx, &translator(Locale::Es), &formatter(Locale::Es, true), now());
        assert_eq!(r.label, "Recibido");
        assert_eq!(r.amount, "+ 1.500 sats");
    }

    // ==================== optional line tests ====================

    #[test]
    fn test_fiat_hidden_when_disabled() {
        let tx = tx_json(r#"{"id":"6","totalAmount":10,"totalAmountFiat":"$0.01"}"#);
        let r = RowView::new(&tx, &translator(Locale::En), &formatter(Locale::En, false), now());
        assert_eq!(r.fiat, None);
    }

    #[test]
    fn test_empty_fiat_string_hidden() {
        let tx = tx_json(r#"{"id":"7","totalAmount":10,"totalAmountFiat":""}"#);
        assert_eq!(row(&tx).fiat, None);
    }

    #[test]
    fn test_time_ago_derived_from_timestamp() {
        let mut tx = tx_json(r#"{"id":"8","totalAmount":10}"#);
        tx.timestamp = Some((now() - chrono::Duration::minutes(10)).timestamp_millis());
        assert_eq!(row(&tx).time_ago.as_deref(), Some("10 minutes ago"));
    }

    #[test]
    fn test_memo_from_comment() {
        let tx = tx_json(r#"{"id":"9","totalAmount":10,"metadata":{"comment":"gm"}}"#);
        assert_eq!(row(&tx).memo.as_deref(), Some("gm"));
    }

    #[test]
    fn test_outgoing_without_state_is_sent() {
        let mut tx = tx_json(r#"{"id":"10","totalAmount":10}"#);
        tx.tx_type = Some(TransactionType::Sent);
        let r = row(&tx);
        assert_eq!(r.label, "Sent");
        assert_eq!(r.treatment.amount_class(), "tx-amount tx-amount-outgoing");
    }

    #[test]
    fn test_missing_type_row_is_outgoing() {
        let tx = tx_json(r#"{"id":"12","state":"failed","totalAmount":7}"#);
        let r = row(&tx);
        assert_eq!(r.label, "Failed");
        assert_eq!(r.treatment, Treatment::OutgoingFailed);
        assert_eq!(r.amount, "- 7 sats");
    }

    #[test]
    fn test_expired_outgoing_row_is_sent() {
        let tx = tx_json(r#"{"id":"13","type":"sent","state":"expired","totalAmount":7}"#);
        let r = row(&tx);
        assert_eq!(r.label, "Sent");
        assert!(!r.pending);
        assert_eq!(r.treatment.amount_class(), "tx-amount tx-amount-outgoing");
    }

    // ==================== detail tests ====================

    #[test]
    fn test_detail_view() {
        let tx = tx_json(
            r#"{"id":"11","type":"sent","state":"settled","totalAmount":10,
                "timestamp":1700000000000,"paymentHash":"abcd","preimage":""}"#,
        );
        let d = DetailView::new(&tx, &translator(Locale::En), &formatter(Locale::En, true), now());
        assert_eq!(d.date.as_deref(), Some("2023-11-14 22:13 UTC"));
        assert_eq!(d.payment_hash.as_deref(), Some("abcd"));
        assert_eq!(d.preimage, None);
        assert_eq!(d.row.label, "Sent");
    }
}
