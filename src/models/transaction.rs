use crate::types::{Amount, TransactionId};

/// A stored transaction.
///
/// Transactions are created once and never change afterwards. A transaction
/// without a `parent_id` is the root of its own tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Caller assigned, globally unique transaction ID.
    pub transaction_id: TransactionId,
    /// Free-form type tag, never blank.
    pub transaction_type: String,
    /// Exact amount of the transaction.
    pub amount: Amount,
    /// The transaction this one hangs off, if any.
    pub parent_id: Option<TransactionId>
}

impl Transaction {
    /// A type tag is usable when it has at least one non-whitespace character.
    pub fn is_valid_type(transaction_type: &str) -> bool {
        !transaction_type.trim().is_empty()
    }
}
