use blockline_types::{Entry, TransactionPayload};

use crate::error::LedgerError;
use crate::ledger::LedgerStatus;

/// Write boundary for ledger append and reconciliation.
pub trait LedgerWriter: Send + Sync {
    /// Validate `candidate` against the tail and append it if valid.
    ///
    /// Returns `Ok(false)` when the candidate was rejected; the ledger is
    /// then unchanged.
    fn try_append(&self, candidate: Entry) -> Result<bool, LedgerError>;

    /// Derive the next entry from the tail and append it, atomically.
    fn append(&self, payload: &TransactionPayload) -> Result<Entry, LedgerError>;

    /// Replace the accepted history with `candidate` only if it is strictly
    /// longer. Entries are not re-validated.
    fn reconcile(&self, candidate: Vec<Entry>) -> Result<bool, LedgerError>;
}

/// Read boundary for ledger queries.
pub trait LedgerReader: Send + Sync {
    fn tail(&self) -> Result<Entry, LedgerError>;

    /// Owned copy of every accepted entry, in sequence order.
    fn snapshot(&self) -> Result<Vec<Entry>, LedgerError>;

    fn entry_at(&self, sequence_number: u64) -> Result<Entry, LedgerError>;

    /// Number of accepted entries, genesis included.
    fn height(&self) -> Result<usize, LedgerError>;

    fn status(&self) -> Result<LedgerStatus, LedgerError>;
}
