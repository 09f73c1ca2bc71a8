use serde::{Deserialize, Serialize};

/// Caller-supplied fields for a new ledger entry.
///
/// Everything else about an entry (sequence number, timestamp, links) is
/// derived by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    #[serde(rename = "UserID")]
    pub owner_id: String,
    #[serde(rename = "TransactionID")]
    pub transaction_id: i64,
    #[serde(rename = "TransactionStatus")]
    pub transaction_status: String,
}

impl TransactionPayload {
    pub fn new(
        owner_id: impl Into<String>,
        transaction_id: i64,
        transaction_status: impl Into<String>,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            transaction_id,
            transaction_status: transaction_status.into(),
        }
    }
}
