//! Raw payload submitted by the registration screen.

use serde::{Deserialize, Serialize};

/// Unvalidated transaction input. Only the normalizer turns this into a [`crate::Transaction`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: String,
    /// `entry` / `expense`; empty while the user has not picked a type.
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    #[serde(default)]
    pub category_key: String,
}

impl RawTransactionForm {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        transaction_type: impl Into<String>,
        category_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            transaction_type: transaction_type.into(),
            category_key: category_key.into(),
        }
    }
}
