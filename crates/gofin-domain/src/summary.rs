//! Derived, never-persisted views computed from the full ledger.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::transaction::TransactionType;

/// One summary figure with its most recent contributing date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub amount: Decimal,
    pub amount_label: String,
    pub last_transaction: Option<DateTime<Utc>>,
    pub last_transaction_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightSummary {
    pub entries: Highlight,
    pub expenses: Highlight,
    pub total: Highlight,
}

/// Expense spend attributed to one catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub key: String,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub total: Decimal,
    pub total_label: String,
    /// Share of all attributed expense spend, whole percent.
    pub percent: Decimal,
    pub percent_label: String,
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub highlights: HighlightSummary,
    pub category_totals: Vec<CategoryTotal>,
    /// Expenses whose category key is missing from the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unattributed: Vec<Uuid>,
    /// Records left out of every total: non-positive stored amounts, or amounts
    /// that would overflow a running sum.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBadge {
    pub name: String,
    pub icon: String,
}

/// Row of the dashboard transaction list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub name: String,
    pub amount_label: String,
    pub category: Option<CategoryBadge>,
    pub date_label: String,
}

/// Time window a summary is restricted to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Month { year: i32, month: u32 },
}

impl Period {
    pub fn month_of(date: DateTime<Utc>) -> Self {
        Period::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        match *self {
            Period::All => true,
            Period::Month { year, month } => date.year() == year && date.month() == month,
        }
    }
}
