use std::sync::Arc;

use blockline_crypto::HashLinker;
use blockline_types::{
    Entry, Fingerprint, Timestamp, TransactionPayload, GENESIS_OWNER_ID,
    GENESIS_TRANSACTION_STATUS,
};

use crate::error::FactoryError;

/// Source of creation timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Builds candidate entries. Never touches a ledger.
#[derive(Clone)]
pub struct EntryFactory {
    clock: Arc<dyn Clock>,
}

impl EntryFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Build the genesis entry: seq 0, no link, fingerprint computed normally.
    pub fn create_genesis(&self) -> Entry {
        Self::seal(Entry {
            sequence_number: 0,
            owner_id: GENESIS_OWNER_ID.into(),
            created_at: self.clock.now().to_ledger_string(),
            transaction_id: 0,
            transaction_status: GENESIS_TRANSACTION_STATUS.into(),
            fingerprint: Fingerprint::zero(),
            previous_fingerprint: None,
        })
    }

    /// Derive the entry that follows `previous`.
    ///
    /// The timestamp is captured at call time and the fingerprint is computed
    /// after every other field is set.
    pub fn create_next(
        &self,
        previous: &Entry,
        owner_id: impl Into<String>,
        transaction_id: i64,
        transaction_status: impl Into<String>,
    ) -> Result<Entry, FactoryError> {
        let sequence_number =
            previous
                .sequence_number
                .checked_add(1)
                .ok_or(FactoryError::SequenceOverflow {
                    previous: previous.sequence_number,
                })?;

        Ok(Self::seal(Entry {
            sequence_number,
            owner_id: owner_id.into(),
            created_at: self.clock.now().to_ledger_string(),
            transaction_id,
            transaction_status: transaction_status.into(),
            fingerprint: Fingerprint::zero(),
            previous_fingerprint: Some(previous.fingerprint),
        }))
    }

    /// [`create_next`](Self::create_next) from a decoded request payload.
    pub fn create_from_payload(
        &self,
        previous: &Entry,
        payload: &TransactionPayload,
    ) -> Result<Entry, FactoryError> {
        self.create_next(
            previous,
            payload.owner_id.as_str(),
            payload.transaction_id,
            payload.transaction_status.as_str(),
        )
    }

    fn seal(entry: Entry) -> Entry {
        let fingerprint = HashLinker::fingerprint(&entry);
        entry.with_fingerprint(fingerprint)
    }
}

impl Default for EntryFactory {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
