//! The persisted ledger: one JSON array of transactions under one namespaced key.
//!
//! The key is the single serialization point of the system. Every mutation is a
//! read-modify-write of the whole array with no version check. Appends issued
//! through the same [`LedgerStore`] are queued behind an async lock, so they never
//! overwrite each other. Two stores (or two processes) pointed at the same key are
//! not coordinated: the last writer wins and the other append is lost.

use std::collections::HashSet;

use gofin_domain::Transaction;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{KeyValueStore, StorageError};

/// Namespace used by the app's existing installs.
pub const DEFAULT_NAMESPACE: &str = "@gofinances";

pub fn transactions_key(namespace: &str) -> String {
    format!("{}:transactions", namespace)
}

pub struct LedgerStore<S> {
    store: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self {
            store,
            key: transactions_key(namespace),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Returns the full ledger in append order. A never-written key reads as empty.
    pub async fn read_all(&self) -> Result<Vec<Transaction>, StorageError> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|source| {
            warn!(key = %self.key, error = %source, "stored ledger is not parseable");
            StorageError::Corrupt {
                key: self.key.clone(),
                source,
            }
        })
    }

    /// Appends one transaction by rewriting the whole array.
    pub async fn append(&self, transaction: Transaction) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut transactions = self.read_all().await?;
        if transactions.iter().any(|existing| existing.id == transaction.id) {
            return Err(StorageError::DuplicateId(transaction.id));
        }
        debug!(key = %self.key, %transaction, "appending transaction");
        transactions.push(transaction);
        self.persist(&transactions).await
    }

    /// Replaces the stored ledger with `transactions`.
    pub async fn write_all(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut seen = HashSet::with_capacity(transactions.len());
        if let Some(duplicate) = transactions.iter().find(|txn| !seen.insert(txn.id)) {
            return Err(StorageError::DuplicateId(duplicate.id));
        }
        self.persist(transactions).await
    }

    /// Drops the stored ledger. The next read starts from empty.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        debug!(key = %self.key, "clearing ledger");
        self.store.remove_item(&self.key).await
    }

    async fn persist(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let json = serde_json::to_string(transactions).map_err(StorageError::Serialize)?;
        self.store.set_item(&self.key, &json).await?;
        debug!(key = %self.key, count = transactions.len(), "ledger written");
        Ok(())
    }
}
