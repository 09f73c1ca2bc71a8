//! Append-only, hash-linked transaction ledger for Blockline.
//!
//! This crate is the heart of Blockline. It provides:
//! - `EntryFactory` to derive the next entry from the current tail
//! - `EntryValidator` for sequence, link, and content checks
//! - `Ledger`, the lock-guarded accepted history with replace-if-longer
//!   reconciliation
//! - `LedgerReader` / `LedgerWriter` trait boundaries

pub mod error;
pub mod factory;
pub mod ledger;
pub mod traits;
pub mod validation;

pub use error::{FactoryError, LedgerError, ValidationFailure};
pub use factory::{Clock, EntryFactory, SystemClock};
pub use ledger::{Ledger, LedgerStatus};
pub use traits::{LedgerReader, LedgerWriter};
pub use validation::EntryValidator;
