//! Turns raw registration input into persisted transaction records.

use std::str::FromStr;

use gofin_domain::{CategoryCatalog, RawTransactionForm, Transaction, TransactionType};
use rust_decimal::Decimal;

use crate::{Clock, ValidationError};

/// Validates form input and builds immutable [`Transaction`] records.
pub struct TransactionService;

impl TransactionService {
    /// Builds a transaction stamped with a fresh id and `clock.now()`.
    ///
    /// Checks run in the order the registration screen reports them: field
    /// errors first, then the type and category selections.
    pub fn normalize(
        raw: &RawTransactionForm,
        catalog: &CategoryCatalog,
        clock: &dyn Clock,
    ) -> Result<Transaction, ValidationError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let amount = parse_amount(&raw.amount)?;
        let transaction_type = parse_type(&raw.transaction_type)?;
        let category = raw.category_key.trim();
        if CategoryCatalog::is_unselected(category) {
            return Err(ValidationError::MissingCategory);
        }
        if !catalog.contains(category) {
            return Err(ValidationError::UnknownCategory(category.to_string()));
        }
        Ok(Transaction::new(
            name,
            amount,
            transaction_type,
            category,
            clock.now(),
        ))
    }
}

/// Largest amount a single transaction may carry (10^15).
///
/// Keeps sums over very large ledgers far below the 96-bit `Decimal` mantissa.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Parses a strictly positive decimal amount, at most [`MAX_AMOUNT`], into its canonical form.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(trimmed.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(trimmed.to_string()));
    }
    Ok(amount.normalize())
}

fn parse_type(raw: &str) -> Result<TransactionType, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingType);
    }
    TransactionType::parse(raw).ok_or_else(|| ValidationError::UnknownType(raw.trim().to_string()))
}
