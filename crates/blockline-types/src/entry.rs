use serde::{Deserialize, Serialize};

use crate::fingerprint::{self, Fingerprint};

/// Owner recorded on the genesis entry.
pub const GENESIS_OWNER_ID: &str = "genesis";

/// Transaction status recorded on the genesis entry.
pub const GENESIS_TRANSACTION_STATUS: &str = "Gas fee";

/// One hash-linked transaction record.
///
/// Field declaration order is the wire order. Keys use the names existing
/// ledger clients read (`Index`, `UserID`, `Timestamp`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Position in the ledger; 0 for genesis.
    #[serde(rename = "Index")]
    pub sequence_number: u64,
    #[serde(rename = "UserID")]
    pub owner_id: String,
    #[serde(rename = "Timestamp")]
    pub created_at: String,
    #[serde(rename = "TransactionID")]
    pub transaction_id: i64,
    #[serde(rename = "TransactionStatus")]
    pub transaction_status: String,
    #[serde(rename = "Hash")]
    pub fingerprint: Fingerprint,
    /// Fingerprint of the preceding entry; `None` only for genesis.
    #[serde(rename = "PrevHash", with = "fingerprint::link")]
    pub previous_fingerprint: Option<Fingerprint>,
}

impl Entry {
    /// Returns `true` if this entry has the genesis position and no link.
    pub fn is_genesis(&self) -> bool {
        self.sequence_number == 0 && self.previous_fingerprint.is_none()
    }

    /// Returns a copy with a different fingerprint. Used to install a
    /// freshly computed digest without mutating a shared entry.
    pub fn with_fingerprint(mut self, fingerprint: Fingerprint) -> Self {
        self.fingerprint = fingerprint;
        self
    }
}
