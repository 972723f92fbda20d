//! Loads the wallet's transaction history from a JSON export on disk.
//!
//! The export is re-read only when its modification time changes.

use crate::transaction::Transaction;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;
use tokio::sync::{OnceCell, RwLock};

const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.json";

#[derive(Error, Debug)]
pub enum TransactionSourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
struct CachedTransactions {
    transactions: Vec<Transaction>,
    modified: Option<SystemTime>,
}

/// Path of the export, from `WALLET_TRANSACTIONS_FILE` or `transactions.json`.
pub fn transactions_file() -> PathBuf {
    std::env::var("WALLET_TRANSACTIONS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_TRANSACTIONS_FILE))
}

pub fn parse_transactions(
    bytes: &[u8],
    path: PathBuf,
) -> Result<Vec<Transaction>, TransactionSourceError> {
    serde_json::from_slice(bytes).map_err(|source| TransactionSourceError::Parse { path, source })
}

/// Returns the transactions in the export, in stored order.
///
/// A missing file is an empty wallet, not an error.
pub async fn load_transactions() -> Result<Vec<Transaction>, TransactionSourceError> {
    static CACHE: OnceCell<Arc<RwLock<Option<CachedTransactions>>>> = OnceCell::const_new();

    let path = transactions_file();
    let modified = match tokio::fs::metadata(&path).await {
        Ok(meta) => meta.modified().ok(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            dioxus_logger::tracing::warn!("{} not found, showing empty history", path.display());
            return Ok(Vec::new());
        }
        Err(source) => return Err(TransactionSourceError::Io { path, source }),
    };

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(None)) })
        .await;

    let read_lock = cache_lock.read().await;
    if let Some(cache) = &*read_lock {
        if modified.is_some() && cache.modified == modified {
            return Ok(cache.transactions.clone());
        }
    }
    drop(read_lock);

    let mut write_lock = cache_lock.write().await;

    // another task may have refreshed the cache while we waited.
    if let Some(cache) = &*write_lock {
        if modified.is_some() && cache.modified == modified {
            return Ok(cache.transactions.clone());
        }
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| TransactionSourceError::Io {
            path: path.clone(),
            source,
        })?;
    let transactions = parse_transactions(&bytes, path.clone())?;
    dioxus_logger::tracing::info!(
        "read {} transactions from {}",
        transactions.len(),
        path.display()
    );

    *write_lock = Some(CachedTransactions {
        transactions: transactions.clone(),
        modified,
    });

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionState;
    use std::time::Duration;
    use std::path::Path;
    use std::time::UNIX_EPOCH;

    fn set_mtime(path: &Path, mtime: SystemTime) {
        std::fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();
    }

    #[test]
    fn test_parse_transactions_list() {
        let json = br#"[
            {"id": "a", "type": "received", "state": "settled", "totalAmount": 100},
            {"id": "b", "type": "sent", "state": "failed", "totalAmount": 50}
        ]"#;
        let txs = parse_transactions(json, PathBuf::from("t.json")).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].id, "b");
    }

    #[test]
    fn test_parse_transactions_empty() {
        let txs = parse_transactions(b"[]", PathBuf::from("t.json")).unwrap();
        assert!(txs.is_empty());
    }

    #[test]
    fn test_parse_transactions_keeps_records_with_unknown_state() {
        let json = br#"[
            {"id": "a", "type": "sent", "state": "expired", "totalAmount": 100},
            {"id": "b", "type": "received", "state": "settled", "totalAmount": 50}
        ]"#;
        let txs = parse_transactions(json, PathBuf::from("t.json")).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].state, Some(TransactionState::Other));
    }

    #[test]
    fn test_parse_transactions_error_names_file() {
        let err = parse_transactions(b"{not json", PathBuf::from("wallet.json")).unwrap_err();
        assert!(matches!(err, TransactionSourceError::Parse { .. }));
        assert!(err.to_string().contains("wallet.json"));
    }

    // ==================== load_transactions tests ====================

    // one test drives the env var and the process-wide cache so nothing races it.
    #[tokio::test]
    async fn test_load_transactions_from_env_file() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let missing = dir.join(format!("wallet-history-missing-{pid}.json"));
        let path = dir.join(format!("wallet-history-{pid}.json"));
        let _ = std::fs::remove_file(&missing);

        // missing file is an empty history.
        std::env::set_var("WALLET_TRANSACTIONS_FILE", &missing);
        assert_eq!(transactions_file(), missing);
        assert!(load_transactions().await.unwrap().is_empty());

        let first = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        std::fs::write(&path, r#"[{"id": "a", "totalAmount": 1}]"#).unwrap();
        set_mtime(&path, first);
        std::env::set_var("WALLET_TRANSACTIONS_FILE", &path);

        let txs = load_transactions().await.unwrap();
        assert_eq!(txs.len(), 1);

        // same mtime: the cached list is served even though the file changed.
        std::fs::write(
            &path,
            r#"[{"id": "a", "totalAmount": 1}, {"id": "b", "totalAmount": 2}]"#,
        )
        .unwrap();
        set_mtime(&path, first);
        assert_eq!(load_transactions().await.unwrap().len(), 1);

        // newer mtime: the file is re-read.
        set_mtime(&path, first + Duration::from_secs(60));
        let txs = load_transactions().await.unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].id, "b");

        // a broken file surfaces as a parse error naming it.
        std::fs::write(&path, "{not json").unwrap();
        set_mtime(&path, first + Duration::from_secs(120));
        let err = load_transactions().await.unwrap_err();
        assert!(matches!(err, TransactionSourceError::Parse { .. }));

        std::env::remove_var("WALLET_TRANSACTIONS_FILE");
        let _ = std::fs::remove_file(&path);
    }
}
