//! This crate contains the wallet's shared types and its fullstack server functions.

pub mod amount;
pub mod currency;
pub mod nostr;
pub mod prefs;
pub mod time_ago;
pub mod transaction;
#[cfg(not(target_arch = "wasm32"))]
mod transaction_source;

use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;
use transaction::Transaction;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Retrieves the wallet's transaction history.
#[post("/api/transactions")]
pub async fn transactions() -> Result<Vec<Transaction>, ApiError> {
    let transactions = transaction_source::load_transactions().await?;
    dioxus_logger::tracing::debug!("serving {} transactions", transactions.len());
    Ok(transactions)
}
