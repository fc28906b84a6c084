use std::str::FromStr;

use chrono::{Duration, TimeZone, Utc};
use gofin_core::{
    transactions_key, FixedClock, LedgerStore, MemoryStore, MoneyFormatter, SummaryService,
    TransactionService, ValidationError, DEFAULT_NAMESPACE, MAX_AMOUNT,
};
use gofin_domain::{CategoryCatalog, RawTransactionForm, Transaction, TransactionType};
use rust_decimal::Decimal;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn record(kind: TransactionType, amount: &str, category: &str, offset_days: i64) -> Transaction {
    let base = Utc.with_ymd_and_hms(2021, 4, 1, 9, 0, 0).unwrap();
    Transaction::new(
        "sample",
        dec(amount),
        kind,
        category,
        base + Duration::days(offset_days),
    )
}

/// Deterministic pseudo-random ledgers of increasing size.
fn assorted_ledgers() -> Vec<Vec<Transaction>> {
    let keys = ["purchases", "food", "salary", "car", "leisure", "studies", "ghost"];
    let mut seed: u64 = 0x2545_f491;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    (0..25)
        .map(|size| {
            (0..size)
                .map(|idx| {
                    let roll = next();
                    let kind = if roll % 3 == 0 {
                        TransactionType::Entry
                    } else {
                        TransactionType::Expense
                    };
                    let cents = (roll % 500_000) as i64 + 1;
                    let amount = Decimal::new(cents, 2).to_string();
                    let category = keys[(roll as usize / 7) % keys.len()];
                    record(kind, &amount, category, idx as i64 % 28)
                })
                .collect()
        })
        .collect()
}

#[test]
fn scenario_entry_and_two_food_expenses() {
    let ledger = vec![
        record(TransactionType::Entry, "1000", "salary", 0),
        record(TransactionType::Expense, "50", "food", 1),
        record(TransactionType::Expense, "30", "food", 2),
    ];
    let summary = SummaryService::summarize(
        &ledger,
        &CategoryCatalog::standard(),
        &MoneyFormatter::default(),
    );
    assert_eq!(summary.highlights.entries.amount, dec("1000"));
    assert_eq!(summary.highlights.expenses.amount, dec("80"));
    assert_eq!(summary.highlights.total.amount, dec("920"));
    assert_eq!(summary.highlights.total.amount_label, "R$ 920,00");
    assert_eq!(summary.category_totals.len(), 1);
    assert_eq!(summary.category_totals[0].key, "food");
    assert_eq!(summary.category_totals[0].name, "Alimentação");
    assert_eq!(summary.category_totals[0].total, dec("80"));
    assert_eq!(summary.category_totals[0].percent_label, "100%");
}

#[test]
fn unknown_category_counts_in_totals_but_not_in_breakdown() {
    let ghost = record(TransactionType::Expense, "25", "ghost", 3);
    let ledger = vec![
        record(TransactionType::Expense, "10", "car", 1),
        ghost.clone(),
    ];
    let summary = SummaryService::summarize(
        &ledger,
        &CategoryCatalog::standard(),
        &MoneyFormatter::default(),
    );
    assert_eq!(summary.highlights.expenses.amount, dec("35"));
    let keys: Vec<_> = summary.category_totals.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, ["car"]);
    assert_eq!(summary.unattributed, vec![ghost.id]);
}

#[test]
fn totals_reconcile_for_assorted_ledgers() {
    let catalog = CategoryCatalog::standard();
    let formatter = MoneyFormatter::default();
    for ledger in assorted_ledgers() {
        let summary = SummaryService::summarize(&ledger, &catalog, &formatter);
        let highlights = &summary.highlights;
        assert_eq!(
            highlights.entries.amount - highlights.expenses.amount,
            highlights.total.amount
        );
        let signed: Decimal = ledger.iter().map(Transaction::signed_amount).sum();
        assert_eq!(signed, highlights.total.amount);

        assert!(summary
            .category_totals
            .iter()
            .all(|total| total.total > Decimal::ZERO));
        let attributed: Decimal = summary.category_totals.iter().map(|t| t.total).sum();
        let ghost_spend: Decimal = ledger
            .iter()
            .filter(|txn| txn.is_expense() && txn.category == "ghost")
            .map(|txn| txn.amount)
            .sum();
        assert_eq!(attributed + ghost_spend, highlights.expenses.amount);
        assert!(summary.skipped.is_empty());
    }
}

#[test]
fn summarize_is_deterministic() {
    let catalog = CategoryCatalog::standard();
    let formatter = MoneyFormatter::default();
    for ledger in assorted_ledgers() {
        let first = SummaryService::summarize(&ledger, &catalog, &formatter);
        let second = SummaryService::summarize(&ledger, &catalog, &formatter);
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn registration_flow_round_trips_through_the_store() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2021, 4, 13, 12, 0, 0).unwrap());
    let catalog = CategoryCatalog::standard();
    let ledger = LedgerStore::new(MemoryStore::new());

    let forms = [
        RawTransactionForm::new("Desenvolvimento de site", "12000", "entry", "salary"),
        RawTransactionForm::new("Hamburgueria Pizzy", "59", "expense", "food"),
        RawTransactionForm::new("Aluguel do apartamento", "1200", "expense", "purchases"),
    ];
    let mut expected = Vec::new();
    for form in &forms {
        let txn = TransactionService::normalize(form, &catalog, &clock).expect("valid form");
        ledger.append(txn.clone()).await.expect("append");
        expected.push(txn);
    }
    assert_eq!(ledger.read_all().await.unwrap(), expected);

    let rejected = TransactionService::normalize(
        &RawTransactionForm::new("Nada", "-5", "expense", "food"),
        &catalog,
        &clock,
    );
    assert!(matches!(rejected, Err(ValidationError::NonPositiveAmount(_))));
    assert_eq!(ledger.read_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn stored_negative_amount_is_skipped_instead_of_breaking_the_summary() {
    let raw = r#"[
        {"id":"6f1c2d8e-0c1a-4b8e-9a55-1f0f3b8a7c01","name":"Mercado","amount":"50","type":"negative","category":"food","date":"2021-04-10T12:00:00Z"},
        {"id":"6f1c2d8e-0c1a-4b8e-9a55-1f0f3b8a7c02","name":"Estorno","amount":"-50","type":"negative","category":"car","date":"2021-04-11T12:00:00Z"}
    ]"#;
    let ledger = LedgerStore::new(MemoryStore::with_item(
        transactions_key(DEFAULT_NAMESPACE),
        raw,
    ));

    let transactions = ledger.read_all().await.expect("stored ledger parses");
    assert_eq!(transactions.len(), 2);

    let summary = SummaryService::summarize(
        &transactions,
        &CategoryCatalog::standard(),
        &MoneyFormatter::default(),
    );
    assert_eq!(summary.highlights.expenses.amount, dec("50"));
    assert_eq!(summary.highlights.total.amount_label, "-R$ 50,00");
    assert_eq!(summary.skipped, vec![transactions[1].id]);
    assert_eq!(summary.category_totals.len(), 1);
    assert_eq!(summary.category_totals[0].key, "food");
    assert_eq!(summary.category_totals[0].percent_label, "100%");
}

#[tokio::test]
async fn largest_accepted_amounts_sum_without_overflow() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2021, 4, 13, 12, 0, 0).unwrap());
    let catalog = CategoryCatalog::standard();
    let ledger = LedgerStore::new(MemoryStore::new());

    let oversized = RawTransactionForm::new(
        "Casa",
        "79228162514264337593543950335",
        "expense",
        "purchases",
    );
    assert!(matches!(
        TransactionService::normalize(&oversized, &catalog, &clock),
        Err(ValidationError::AmountTooLarge(_))
    ));

    let ceiling = RawTransactionForm::new("Casa", "1000000000000000", "expense", "purchases");
    for _ in 0..200 {
        let txn =
            TransactionService::normalize(&ceiling, &catalog, &clock).expect("ceiling accepted");
        ledger.append(txn).await.expect("append");
    }

    let transactions = ledger.read_all().await.expect("read back");
    let summary = SummaryService::summarize(&transactions, &catalog, &MoneyFormatter::default());
    assert_eq!(summary.highlights.expenses.amount, MAX_AMOUNT * Decimal::from(200));
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.category_totals[0].percent_label, "100%");
}
