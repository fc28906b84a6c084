use gofin_config::ConfigError;
use gofin_core::{StorageError, ValidationError};
use gofin_domain::Locale;
use thiserror::Error;

/// Failures surfaced by [`crate::FinanceTracker`].
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TrackerError {
    /// Text to show the user. Storage and config failures get a generic message.
    pub fn user_message(&self, locale: Locale) -> String {
        match (self, locale) {
            (TrackerError::Validation(err), _) => err.message(locale),
            (_, Locale::PtBr) => "Não foi possível registrar as informações".into(),
            (_, Locale::EnUs) => "Could not save the information".into(),
        }
    }
}
