//! Aggregation over the full ledger: highlights, per-category spend and list rows.
//!
//! Aggregation never fails. A record whose category is missing from the catalog is
//! still counted in the entry/expense totals, logged, and reported in
//! [`LedgerSummary::unattributed`] instead of being attributed to a category.
//! A record with a non-positive stored amount, or one that would push a running
//! sum past the `Decimal` range, is logged and reported in [`LedgerSummary::skipped`]
//! and left out of every total.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gofin_domain::{
    CategoryBadge, CategoryCatalog, CategoryTotal, Highlight, HighlightSummary, LedgerSummary,
    Period, Transaction, TransactionListItem, TransactionType,
};
use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::{CurrencyFormatter, DateFormatter, MoneyFormatter};

/// Raw figures of one pass, before any formatting.
#[derive(Debug, Default)]
struct Totals<'a> {
    entries: Decimal,
    expenses: Decimal,
    last_entry: Option<DateTime<Utc>>,
    last_expense: Option<DateTime<Utc>>,
    /// Records that contributed to the sums, in ledger order.
    counted: Vec<&'a Transaction>,
    skipped: Vec<Uuid>,
}

impl<'a> Totals<'a> {
    fn collect(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Totals::default();
        for txn in transactions {
            if txn.amount <= Decimal::ZERO {
                warn!(
                    transaction = %txn.id,
                    amount = %txn.amount,
                    "stored amount is not positive; excluded from totals"
                );
                totals.skipped.push(txn.id);
                continue;
            }
            let current = match txn.transaction_type {
                TransactionType::Entry => totals.entries,
                TransactionType::Expense => totals.expenses,
            };
            let Some(next) = current.checked_add(txn.amount) else {
                warn!(
                    transaction = %txn.id,
                    amount = %txn.amount,
                    "amount overflows the running total; excluded from totals"
                );
                totals.skipped.push(txn.id);
                continue;
            };
            match txn.transaction_type {
                TransactionType::Entry => {
                    totals.entries = next;
                    keep_latest(&mut totals.last_entry, txn.date);
                }
                TransactionType::Expense => {
                    totals.expenses = next;
                    keep_latest(&mut totals.last_expense, txn.date);
                }
            }
            totals.counted.push(txn);
        }
        totals
    }

    /// Both sums are non-negative, so the difference cannot leave the `Decimal` range.
    fn net(&self) -> Decimal {
        self.entries.saturating_sub(self.expenses)
    }
}

fn keep_latest(slot: &mut Option<DateTime<Utc>>, date: DateTime<Utc>) {
    if slot.map_or(true, |current| date > current) {
        *slot = Some(date);
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Computes highlights and category totals over the whole ledger.
    pub fn summarize(
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        formatter: &MoneyFormatter,
    ) -> LedgerSummary {
        Self::summarize_period(transactions, Period::All, catalog, formatter)
    }

    /// Same as [`SummaryService::summarize`], restricted to `period`.
    pub fn summarize_period(
        transactions: &[Transaction],
        period: Period,
        catalog: &CategoryCatalog,
        formatter: &MoneyFormatter,
    ) -> LedgerSummary {
        let totals = Totals::collect(
            transactions
                .iter()
                .filter(|txn| period.contains(txn.date)),
        );
        let highlights = highlights_for(&totals, formatter);
        let (category_totals, unattributed) =
            category_totals_for(&totals.counted, catalog, formatter);
        LedgerSummary {
            highlights,
            category_totals,
            unattributed,
            skipped: totals.skipped,
        }
    }

    pub fn highlights(transactions: &[Transaction], formatter: &MoneyFormatter) -> HighlightSummary {
        highlights_for(&Totals::collect(transactions), formatter)
    }

    /// Expense totals per catalog category, in catalog order, positive sums only.
    pub fn category_totals(
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        formatter: &MoneyFormatter,
    ) -> Vec<CategoryTotal> {
        let totals = Totals::collect(transactions);
        category_totals_for(&totals.counted, catalog, formatter).0
    }

    /// Dashboard rows, newest first.
    pub fn list_items(
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        formatter: &MoneyFormatter,
    ) -> Vec<TransactionListItem> {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
            .into_iter()
            .map(|txn| TransactionListItem {
                id: txn.id,
                transaction_type: txn.transaction_type,
                name: txn.name.clone(),
                amount_label: formatter.format_amount(txn.amount),
                category: catalog.find(&txn.category).map(|category| CategoryBadge {
                    name: category.name.clone(),
                    icon: category.icon.clone(),
                }),
                date_label: formatter.format_date(txn.date),
            })
            .collect()
    }
}

fn highlights_for(totals: &Totals<'_>, formatter: &MoneyFormatter) -> HighlightSummary {
    let last_any = totals.last_entry.max(totals.last_expense);
    HighlightSummary {
        entries: highlight(totals.entries, totals.last_entry, formatter, |date| {
            formatter.last_entry_label(date)
        }),
        expenses: highlight(totals.expenses, totals.last_expense, formatter, |date| {
            formatter.last_expense_label(date)
        }),
        total: highlight(totals.net(), last_any, formatter, |date| {
            formatter.total_interval_label(date)
        }),
    }
}

fn highlight(
    amount: Decimal,
    last_transaction: Option<DateTime<Utc>>,
    formatter: &MoneyFormatter,
    caption: impl Fn(DateTime<Utc>) -> String,
) -> Highlight {
    Highlight {
        amount,
        amount_label: formatter.format_amount(amount),
        last_transaction,
        last_transaction_label: last_transaction
            .map(caption)
            .unwrap_or_else(|| formatter.empty_label()),
    }
}

/// Expects only records [`Totals::collect`] counted, so every category sum is
/// bounded by the expense total and cannot overflow.
fn category_totals_for(
    transactions: &[&Transaction],
    catalog: &CategoryCatalog,
    formatter: &MoneyFormatter,
) -> (Vec<CategoryTotal>, Vec<Uuid>) {
    let mut sums: HashMap<&str, Decimal> = HashMap::new();
    let mut unattributed = Vec::new();
    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        if catalog.contains(&txn.category) {
            *sums.entry(txn.category.as_str()).or_default() += txn.amount;
        } else {
            warn!(
                transaction = %txn.id,
                category = %txn.category,
                "expense references unknown category; excluded from category totals"
            );
            unattributed.push(txn.id);
        }
    }

    let attributed: Decimal = sums.values().copied().sum();
    let totals = catalog
        .iter()
        .filter_map(|category| {
            let total = sums.get(category.key.as_str()).copied()?;
            if total <= Decimal::ZERO {
                return None;
            }
            let percent = if attributed.is_zero() {
                Decimal::ZERO
            } else {
                total / attributed * Decimal::ONE_HUNDRED
            };
            Some(CategoryTotal {
                key: category.key.clone(),
                name: category.name.clone(),
                icon: category.icon.clone(),
                color: category.color.clone(),
                total,
                total_label: formatter.format_amount(total),
                percent: percent.round_dp(0),
                percent_label: formatter.format_percent(percent),
            })
        })
        .collect();
    (totals, unattributed)
}
