use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Transaction [{transaction_id}] is already present in storage")]
    AlreadyPresent {
        transaction_id: TransactionId
    }
}

impl StorageError {
    pub fn already_present(transaction_id: TransactionId) -> Self {
        Self::AlreadyPresent { transaction_id }
    }
}
