//! Entry point the screens talk to: register a form, read the ledger, get summaries.

use gofin_config::Config;
use gofin_core::{
    Clock, KeyValueStore, LedgerStore, MoneyFormatter, SummaryService, SystemClock,
    TransactionService,
};
use gofin_domain::{
    CategoryCatalog, CategoryTotal, HighlightSummary, LedgerSummary, Locale, Period,
    RawTransactionForm, Transaction, TransactionListItem,
};
use gofin_storage_json::JsonFileStore;
use serde::Serialize;
use tracing::{debug, info};

use crate::TrackerError;

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub highlights: HighlightSummary,
    pub transactions: Vec<TransactionListItem>,
}

/// Wires catalog, formatter, clock and ledger store together.
pub struct FinanceTracker<S> {
    ledger: LedgerStore<S>,
    catalog: CategoryCatalog,
    formatter: MoneyFormatter,
    clock: Box<dyn Clock>,
}

impl FinanceTracker<JsonFileStore> {
    /// Opens the file-backed ledger under the configured data directory.
    pub async fn open_default(config: &Config) -> Result<Self, TrackerError> {
        let root = config.resolve_data_dir();
        let store = JsonFileStore::open(root.clone()).await?;
        info!(root = %root.display(), namespace = %config.namespace, "opened ledger store");
        Ok(Self::new(store, config))
    }
}

impl<S: KeyValueStore> FinanceTracker<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            ledger: LedgerStore::with_namespace(store, &config.namespace),
            catalog: CategoryCatalog::standard(),
            formatter: MoneyFormatter::new(config.locale, config.currency.clone())
                .with_negative_style(config.negative_style),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn formatter(&self) -> &MoneyFormatter {
        &self.formatter
    }

    pub fn locale(&self) -> Locale {
        self.formatter.locale
    }

    pub fn ledger(&self) -> &LedgerStore<S> {
        &self.ledger
    }

    /// Validates `form` and appends the resulting transaction.
    pub async fn register(&self, form: &RawTransactionForm) -> Result<Transaction, TrackerError> {
        let transaction = TransactionService::normalize(form, &self.catalog, self.clock.as_ref())
            .map_err(|err| {
                debug!(error = %err, "registration rejected");
                err
            })?;
        self.ledger.append(transaction.clone()).await?;
        info!(id = %transaction.id, kind = %transaction.transaction_type, "transaction registered");
        Ok(transaction)
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, TrackerError> {
        Ok(self.ledger.read_all().await?)
    }

    pub async fn summary(&self, period: Period) -> Result<LedgerSummary, TrackerError> {
        let transactions = self.ledger.read_all().await?;
        Ok(SummaryService::summarize_period(
            &transactions,
            period,
            &self.catalog,
            &self.formatter,
        ))
    }

    pub async fn dashboard(&self) -> Result<Dashboard, TrackerError> {
        let transactions = self.ledger.read_all().await?;
        Ok(Dashboard {
            highlights: SummaryService::highlights(&transactions, &self.formatter),
            transactions: SummaryService::list_items(&transactions, &self.catalog, &self.formatter),
        })
    }

    /// Per-category expense breakdown for `period`.
    pub async fn resume(&self, period: Period) -> Result<Vec<CategoryTotal>, TrackerError> {
        Ok(self.summary(period).await?.category_totals)
    }

    /// Deletes every stored transaction.
    pub async fn reset(&self) -> Result<(), TrackerError> {
        self.ledger.clear().await?;
        info!(key = %self.ledger.key(), "ledger reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gofin_core::{FixedClock, MemoryStore};

    fn tracker() -> FinanceTracker<MemoryStore> {
        FinanceTracker::new(MemoryStore::new(), &Config::default())
            .with_clock(FixedClock(Utc.with_ymd_and_hms(2021, 4, 13, 12, 0, 0).unwrap()))
    }

    #[tokio::test]
    async fn rejected_form_leaves_ledger_untouched() {
        let tracker = tracker();
        let err = tracker
            .register(&RawTransactionForm::new("Pizza", "59", "", "food"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(Locale::PtBr), "Selecione o tipo da transação");
        assert!(tracker.transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn namespace_comes_from_config() {
        let config = Config {
            namespace: "@household".into(),
            ..Config::default()
        };
        let tracker = FinanceTracker::new(MemoryStore::new(), &config);
        assert_eq!(tracker.ledger().key(), "@household:transactions");
    }
}
