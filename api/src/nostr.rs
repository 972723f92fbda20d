//! Nostr key encoding used to show zap senders.

use bech32::Bech32;
use bech32::Hrp;
use thiserror::Error;

const NPUB_HRP: Hrp = Hrp::parse_unchecked("npub");

#[derive(Error, Debug)]
pub enum NpubError {
    #[error("pubkey is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("pubkey must be 32 bytes, got {0}")]
    Length(usize),
    #[error(transparent)]
    Encode(#[from] bech32::EncodeError),
}

/// Encodes a hex x-only public key as a NIP-19 `npub` string.
pub fn npub_encode(pubkey_hex: &str) -> Result<String, NpubError> {
    let bytes = hex::decode(pubkey_hex)?;
    if bytes.len() != 32 {
        return Err(NpubError::Length(bytes.len()));
    }
    Ok(bech32::encode::<Bech32>(NPUB_HRP, &bytes)?)
}

/// Like [`npub_encode`] but swallows malformed keys, which transaction
/// metadata from third parties can contain.
pub fn safe_npub_encode(pubkey_hex: &str) -> Option<String> {
    match npub_encode(pubkey_hex) {
        Ok(npub) => Some(npub),
        Err(e) => {
            dioxus_logger::tracing::debug!("skipping pubkey {pubkey_hex}: {e}");
            None
        }
    }
}
