use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use blockline_types::{Entry, Fingerprint, TransactionPayload};
use serde::Serialize;

use crate::error::LedgerError;
use crate::factory::EntryFactory;
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation::EntryValidator;

/// Summary of the accepted history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerStatus {
    pub height: usize,
    pub latest_sequence: u64,
    pub latest_fingerprint: Fingerprint,
    pub genesis_fingerprint: Fingerprint,
}

/// The accepted, append-only entry sequence.
///
/// Every read and write goes through one `RwLock`. Write paths hold the
/// write guard across read-tail, validate and push, so two appends can
/// never both extend the same tail.
pub struct Ledger {
    factory: EntryFactory,
    inner: RwLock<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    entries: Vec<Entry>,
}

impl LedgerState {
    fn tail(&self) -> Result<&Entry, LedgerError> {
        self.entries.last().ok_or(LedgerError::EmptyLedger)
    }

    /// Longest-chain-wins: swap in `candidate` only if strictly longer.
    fn replace_if_longer(&mut self, candidate: Vec<Entry>) -> bool {
        if candidate.len() > self.entries.len() {
            self.entries = candidate;
            true
        } else {
            false
        }
    }
}

impl Ledger {
    /// An empty ledger. Call [`initialize`](Self::initialize) before use.
    pub fn new(factory: EntryFactory) -> Self {
        Self {
            factory,
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Seed the genesis entry. Succeeds exactly once.
    pub fn initialize(&self) -> Result<Entry, LedgerError> {
        let mut state = self.write()?;
        if !state.entries.is_empty() {
            return Err(LedgerError::AlreadyInitialized);
        }
        let genesis = self.factory.create_genesis();
        state.entries.push(genesis.clone());
        Ok(genesis)
    }

    /// Returns `true` once genesis has been seeded.
    pub fn is_initialized(&self) -> Result<bool, LedgerError> {
        Ok(!self.read()?.entries.is_empty())
    }

    /// Validate every link of `candidate`, then apply the replace-if-longer
    /// rule. A corrupted sequence is refused regardless of its length.
    pub fn reconcile_verified(&self, candidate: Vec<Entry>) -> Result<bool, LedgerError> {
        EntryValidator::validate_sequence(&candidate)?;
        self.reconcile(candidate)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, LedgerState>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LedgerState>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(EntryFactory::default())
    }
}

impl LedgerWriter for Ledger {
    fn try_append(&self, candidate: Entry) -> Result<bool, LedgerError> {
        let mut state = self.write()?;
        let tail = state.tail()?;
        if !EntryValidator::is_valid(&candidate, tail) {
            return Ok(false);
        }
        // current + candidate is always one longer, so it always wins
        state.entries.push(candidate);
        Ok(true)
    }

    fn append(&self, payload: &TransactionPayload) -> Result<Entry, LedgerError> {
        let mut state = self.write()?;
        let tail = state.tail()?;
        let candidate = self.factory.create_from_payload(tail, payload)?;
        EntryValidator::check(&candidate, tail)?;
        state.entries.push(candidate.clone());
        Ok(candidate)
    }

    fn reconcile(&self, candidate: Vec<Entry>) -> Result<bool, LedgerError> {
        Ok(self.write()?.replace_if_longer(candidate))
    }
}

impl LedgerReader for Ledger {
    fn tail(&self) -> Result<Entry, LedgerError> {
        self.read()?.tail().cloned()
    }

    fn snapshot(&self) -> Result<Vec<Entry>, LedgerError> {
        let state = self.read()?;
        if state.entries.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(state.entries.clone())
    }

    fn entry_at(&self, sequence_number: u64) -> Result<Entry, LedgerError> {
        let state = self.read()?;
        state
            .entries
            .iter()
            .find(|e| e.sequence_number == sequence_number)
            .cloned()
            .ok_or(LedgerError::NotFound {
                sequence: sequence_number,
            })
    }

    fn height(&self) -> Result<usize, LedgerError> {
        Ok(self.read()?.entries.len())
    }

    fn status(&self) -> Result<LedgerStatus, LedgerError> {
        let state = self.read()?;
        let (Some(genesis), Some(tail)) = (state.entries.first(), state.entries.last()) else {
            return Err(LedgerError::EmptyLedger);
        };
        Ok(LedgerStatus {
            height: state.entries.len(),
            latest_sequence: tail.sequence_number,
            latest_fingerprint: tail.fingerprint,
            genesis_fingerprint: genesis.fingerprint,
        })
    }
}
