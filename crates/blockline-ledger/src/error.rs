/// Errors produced while constructing a new entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error("sequence number overflow after {previous}")]
    SequenceOverflow { previous: u64 },
}

/// The validator check a candidate failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("sequence discontinuity: expected {expected}, found {found}")]
    SequenceDiscontinuity { expected: u64, found: u64 },

    #[error("broken link at seq {sequence}: previous fingerprint mismatch")]
    BrokenLink { sequence: u64 },

    #[error("fingerprint mismatch at seq {sequence}: stored digest differs from computed")]
    FingerprintMismatch { sequence: u64 },

    #[error("malformed genesis entry")]
    MalformedGenesis,

    #[error("candidate sequence is empty")]
    EmptySequence,

    #[error("entry at position {position} is invalid: {failure}")]
    AtPosition {
        position: usize,
        failure: Box<ValidationFailure>,
    },
}

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger has not been initialized")]
    EmptyLedger,

    #[error("ledger is already initialized")]
    AlreadyInitialized,

    #[error("entry not found: seq {sequence}")]
    NotFound { sequence: u64 },

    #[error("append rejected: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("entry construction failed: {0}")]
    Factory(#[from] FactoryError),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}
