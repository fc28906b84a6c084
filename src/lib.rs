#![doc(test(attr(deny(warnings))))]

//! gofin records income and expense transactions in a local key-value store and
//! derives the dashboard highlights and per-category spending from the full ledger.

pub mod error;
pub mod tracker;
pub mod utils;

pub use error::TrackerError;
pub use gofin_config::{Config, ConfigManager};
pub use gofin_core::{
    Clock, FixedClock, KeyValueStore, LedgerStore, MemoryStore, MoneyFormatter, StorageError,
    SummaryService, SystemClock, TransactionService, ValidationError,
};
pub use gofin_domain::{
    Category, CategoryCatalog, CategoryTotal, CurrencyCode, HighlightSummary, LedgerSummary,
    Locale, NegativeStyle, Period, RawTransactionForm, Transaction, TransactionListItem,
    TransactionType,
};
pub use gofin_storage_json::JsonFileStore;
pub use tracker::{Dashboard, FinanceTracker};
pub use utils::build_info;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git_hash = build.git_hash,
            git_status = build.git_status,
            "gofin tracing initialized."
        );
    });
}
