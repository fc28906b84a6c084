use std::io;

use gofin_domain::Locale;
use thiserror::Error;
use uuid::Uuid;

/// Rejected user input. Raised only by the normalizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation failed: name is required")]
    MissingName,
    #[error("Validation failed: amount is required")]
    MissingAmount,
    #[error("Validation failed: amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("Validation failed: amount `{0}` must be greater than zero")]
    NonPositiveAmount(String),
    #[error("Validation failed: amount `{0}` exceeds the per-transaction limit")]
    AmountTooLarge(String),
    #[error("Validation failed: transaction type not selected")]
    MissingType,
    #[error("Validation failed: unknown transaction type `{0}`")]
    UnknownType(String),
    #[error("Validation failed: category not selected")]
    MissingCategory,
    #[error("Validation failed: unknown category `{0}`")]
    UnknownCategory(String),
}

impl ValidationError {
    /// Message suitable for showing to the person filling the form.
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::PtBr => match self {
                ValidationError::MissingName => "Nome é obrigatório".into(),
                ValidationError::MissingAmount => "O valor é obrigatório".into(),
                ValidationError::InvalidAmount(_) => "Informe um valor numérico".into(),
                ValidationError::NonPositiveAmount(_) => "O valor não pode ser negativo".into(),
                ValidationError::AmountTooLarge(_) => "O valor excede o limite permitido".into(),
                ValidationError::MissingType | ValidationError::UnknownType(_) => {
                    "Selecione o tipo da transação".into()
                }
                ValidationError::MissingCategory | ValidationError::UnknownCategory(_) => {
                    "Selecione a categoria".into()
                }
            },
            Locale::EnUs => match self {
                ValidationError::MissingName => "Name is required".into(),
                ValidationError::MissingAmount => "Amount is required".into(),
                ValidationError::InvalidAmount(_) => "Enter a numeric amount".into(),
                ValidationError::NonPositiveAmount(_) => "Amount must be positive".into(),
                ValidationError::AmountTooLarge(_) => "Amount exceeds the allowed limit".into(),
                ValidationError::MissingType | ValidationError::UnknownType(_) => {
                    "Select the transaction type".into()
                }
                ValidationError::MissingCategory | ValidationError::UnknownCategory(_) => {
                    "Select a category".into()
                }
            },
        }
    }
}

/// Failures of the persistent ledger store. Never retried internally.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Stored value under `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Transaction {0} already exists in the ledger")]
    DuplicateId(Uuid),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn is_corruption(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_messages_match_registration_screen() {
        assert_eq!(
            ValidationError::MissingType.message(Locale::PtBr),
            "Selecione o tipo da transação"
        );
        assert_eq!(
            ValidationError::InvalidAmount("abc".into()).message(Locale::EnUs),
            "Enter a numeric amount"
        );
    }

    #[test]
    fn display_includes_offending_value() {
        let err = ValidationError::UnknownCategory("ghost".into());
        assert!(err.to_string().contains("ghost"));
    }
}
