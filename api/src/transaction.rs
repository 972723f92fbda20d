//! Payment records as delivered by the wallet backend, plus the rules that
//! turn one into the text a history row shows.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::currency::DisplayCurrency;
use crate::nostr::safe_npub_encode;

/// Number of npub characters kept when naming a zap sender.
const NPUB_PREFIX_LEN: usize = 12;

/// Direction marker. Markers other than `sent`/`received` are kept as `Other`
/// rather than rejecting the record.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sent,
    Received,
    #[serde(other)]
    Other,
}

/// Lifecycle state. Unlisted states (e.g. `expired`) become `Other`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Settled,
    Pending,
    Failed,
    #[serde(other)]
    Other,
}

/// An empty `type` string carries no marker, same as a missing one.
fn deserialize_tx_type<'de, D>(deserializer: D) -> Result<Option<TransactionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(|s| match s.as_str() {
        "sent" => TransactionType::Sent,
        "received" => TransactionType::Received,
        _ => TransactionType::Other,
    }))
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PayerData {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct NostrData {
    #[serde(default)]
    pub pubkey: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RecipientData {
    #[serde(default)]
    pub identifier: Option<String>,
}

/// NIP-47 transaction metadata. Every part is optional and unknown keys are
/// ignored.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TransactionMetadata {
    #[serde(default)]
    pub payer_data: Option<PayerData>,
    #[serde(default)]
    pub nostr: Option<NostrData>,
    #[serde(default)]
    pub recipient_data: Option<RecipientData>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A single payment in the wallet history.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default, rename = "type", deserialize_with = "deserialize_tx_type")]
    pub tx_type: Option<TransactionType>,
    #[serde(default)]
    pub state: Option<TransactionState>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<TransactionMetadata>,
    #[serde(default)]
    pub time_ago: Option<String>,
    /// Unix time in milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub total_amount: i64,
    #[serde(default)]
    pub display_amount: Option<(f64, DisplayCurrency)>,
    #[serde(default)]
    pub total_amount_fiat: Option<String>,
    #[serde(default)]
    pub payment_hash: Option<String>,
    #[serde(default)]
    pub preimage: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// The translation key naming what happened to a payment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransactionLabel {
    Received,
    Sent,
    Sending,
    Failed,
}

impl TransactionLabel {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Sent => "sent",
            Self::Sending => "sending",
            Self::Failed => "failed",
        }
    }
}

/// Which of the four row treatments (icon and colour) applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Treatment {
    Incoming,
    OutgoingSettled,
    OutgoingPending,
    OutgoingFailed,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl Transaction {
    /// A `sent` marker, or no marker at all, makes a payment outgoing. Any
    /// other marker is incoming.
    pub fn direction(&self) -> Direction {
        match self.tx_type {
            None | Some(TransactionType::Sent) => Direction::Outgoing,
            Some(TransactionType::Received | TransactionType::Other) => Direction::Incoming,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_some_and(|s| s.is_pending())
    }

    pub fn is_failed(&self) -> bool {
        self.state.is_some_and(|s| s.is_failed())
    }

    pub fn label(&self) -> TransactionLabel {
        match (self.direction(), self.state) {
            (Direction::Incoming, _) => TransactionLabel::Received,
            (Direction::Outgoing, Some(TransactionState::Pending)) => TransactionLabel::Sending,
            (Direction::Outgoing, Some(TransactionState::Failed)) => TransactionLabel::Failed,
            (Direction::Outgoing, _) => TransactionLabel::Sent,
        }
    }

    pub fn treatment(&self) -> Treatment {
        match (self.direction(), self.state) {
            (Direction::Incoming, _) => Treatment::Incoming,
            (Direction::Outgoing, Some(TransactionState::Pending)) => Treatment::OutgoingPending,
            (Direction::Outgoing, Some(TransactionState::Failed)) => Treatment::OutgoingFailed,
            (Direction::Outgoing, _) => Treatment::OutgoingSettled,
        }
    }

    pub fn payer_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .payer_data
            .as_ref()
            .and_then(|p| non_empty(&p.name))
    }

    pub fn nostr_pubkey(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .nostr
            .as_ref()
            .and_then(|n| non_empty(&n.pubkey))
    }

    pub fn recipient_identifier(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .recipient_data
            .as_ref()
            .and_then(|r| non_empty(&r.identifier))
    }

    pub fn comment(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| non_empty(&m.comment))
    }

    /// Who paid: the payer's name, or a shortened npub for zaps.
    pub fn from_text(&self) -> Option<String> {
        if let Some(name) = self.payer_name() {
            return Some(format!("from {name}"));
        }
        let npub = self.nostr_pubkey().and_then(safe_npub_encode)?;
        let short: String = npub.chars().take(NPUB_PREFIX_LEN).collect();
        Some(format!("zap from {short}..."))
    }

    /// Who was paid, if the backend recorded a recipient identifier.
    pub fn to_text(&self) -> Option<String> {
        let identifier = self.recipient_identifier()?;
        let prefix = if self.is_failed() { "payment " } else { "" };
        Some(format!("{prefix}to {identifier}"))
    }

    /// The secondary line: the description, else the payer's comment.
    pub fn memo(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| self.comment())
    }

    pub fn sign(&self) -> char {
        match self.direction() {
            Direction::Outgoing => '-',
            Direction::Incoming => '+',
        }
    }

    pub fn fiat_equivalent(&self) -> Option<&str> {
        non_empty(&self.total_amount_fiat)
    }
}
