use std::fmt::Write as _;

use blockline_types::{Entry, Fingerprint};
use sha2::{Digest, Sha256};

/// Deterministic fingerprint derivation for ledger entries.
///
/// The preimage is the concatenation, with no separators, of:
///
/// 1. `sequence_number` as decimal text
/// 2. `owner_id`
/// 3. `created_at`
/// 4. `transaction_id` as decimal text (with a leading `-` when negative)
/// 5. `transaction_status`
/// 6. `previous_fingerprint` as lowercase hex, or nothing for genesis
///
/// encoded as UTF-8 and hashed with SHA-256. The entry's own `fingerprint`
/// field never contributes.
pub struct HashLinker;

impl HashLinker {
    /// The canonical text that is hashed for `entry`.
    pub fn preimage(entry: &Entry) -> String {
        let mut record = String::with_capacity(
            entry.owner_id.len() + entry.created_at.len() + entry.transaction_status.len() + 104,
        );
        // Writing into a String cannot fail.
        let _ = write!(record, "{}", entry.sequence_number);
        record.push_str(&entry.owner_id);
        record.push_str(&entry.created_at);
        let _ = write!(record, "{}", entry.transaction_id);
        record.push_str(&entry.transaction_status);
        if let Some(prev) = &entry.previous_fingerprint {
            record.push_str(&prev.to_hex());
        }
        record
    }

    /// Compute the fingerprint for `entry` from its fields.
    pub fn fingerprint(entry: &Entry) -> Fingerprint {
        let digest: [u8; 32] = Sha256::digest(Self::preimage(entry).as_bytes()).into();
        Fingerprint::from_hash(digest)
    }

    /// Returns `true` if the stored fingerprint matches a recomputation.
    pub fn verify(entry: &Entry) -> bool {
        Self::fingerprint(entry) == entry.fingerprint
    }
}
