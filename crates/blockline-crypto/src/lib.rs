//! Hash linking for Blockline.
//!
//! Provides the deterministic fingerprint every ledger entry carries and
//! that every validator recomputes. All digests come from SHA-256 via the
//! `sha2` crate; no custom cryptography.

pub mod linker;

pub use linker::HashLinker;
