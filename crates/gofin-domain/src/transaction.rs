//! Domain models for persisted ledger transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense record as persisted in the ledger.
///
/// Field names are part of the storage format and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    /// Always strictly positive; the sign lives in `transaction_type`.
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Key into the category catalog. May dangle for records written by older catalogs.
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        transaction_type: TransactionType,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            transaction_type,
            category: category.into(),
            date,
        }
    }

    pub fn is_entry(&self) -> bool {
        self.transaction_type == TransactionType::Entry
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Contribution of this record to the net total.
    pub fn signed_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Entry => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "txn:{} [{} {} {}]",
            self.id, self.transaction_type, self.amount, self.category
        )
    }
}

/// Direction of a transaction.
///
/// Stored as `positive` / `negative`, the values existing ledgers already contain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "positive", alias = "entry")]
    Entry,
    #[serde(rename = "negative", alias = "expense")]
    Expense,
}

impl TransactionType {
    /// Parses the value submitted by a form. Blank input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "entry" | "positive" | "income" | "up" => Some(TransactionType::Entry),
            "expense" | "negative" | "outcome" | "down" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Entry => "entry",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}
