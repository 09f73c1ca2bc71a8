//! Foundation types for Blockline.
//!
//! This crate provides the data model shared by every other Blockline crate.
//!
//! # Key Types
//!
//! - [`Entry`] — One hash-linked transaction record in the ledger
//! - [`Fingerprint`] — 32-byte SHA-256 digest rendered as lowercase hex
//! - [`TransactionPayload`] — Caller-supplied fields for a new entry
//! - [`Timestamp`] — Wall-clock capture in the ledger's text layout

pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod payload;
pub mod temporal;

pub use entry::{Entry, GENESIS_OWNER_ID, GENESIS_TRANSACTION_STATUS};
pub use error::TypeError;
pub use fingerprint::Fingerprint;
pub use payload::TransactionPayload;
pub use temporal::Timestamp;
