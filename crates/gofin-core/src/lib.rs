//! gofin-core
//!
//! Business logic for the transaction ledger: formatting, normalization,
//! persistence through an async key-value seam, and aggregation.
//! Depends on gofin-domain. No terminal I/O, no concrete file storage.

pub mod error;
pub mod format;
pub mod ledger_store;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;

pub use error::{StorageError, ValidationError};
pub use format::*;
pub use ledger_store::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;
