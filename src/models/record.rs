use serde::Deserialize;

use crate::types::{Amount, TransactionId};

/// Represents a single row from the input CSV file.
///
/// The row is taken as-is; validation happens when it is saved through the
/// service. A missing `type` deserializes to an empty string so the service can
/// reject it with the proper error instead of the row being dropped as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "tx")]
    pub transaction_id: TransactionId,
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    pub amount: Amount,
    /// Empty for root transactions.
    #[serde(rename = "parent", default)]
    pub parent_id: Option<TransactionId>
}
