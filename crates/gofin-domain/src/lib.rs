//! gofin-domain
//!
//! Pure domain models (Transaction, Category catalog, derived summaries).
//! No I/O, no storage. Only data types and core enums.

pub mod category;
pub mod form;
pub mod locale;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use form::*;
pub use locale::*;
pub use summary::*;
pub use transaction::*;
