use crate::storage::StorageError;
use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Invalid transaction type [{transaction_type:?}]")]
    InvalidTransactionType {
        transaction_type: String
    },
    #[error("Duplicate transaction [{transaction_id}]")]
    DuplicateTransaction {
        transaction_id: TransactionId
    },
    #[error("Parent transaction [{parent_id}] of transaction [{transaction_id}] was not found")]
    InvalidParentTransaction {
        transaction_id: TransactionId,
        parent_id: TransactionId
    },
    #[error("Transaction [{transaction_id}] was not found")]
    InvalidTransactionId {
        transaction_id: TransactionId
    },
    #[error("Total of the tree of transaction [{transaction_id}] cannot be held as an exact decimal")]
    Overflow {
        transaction_id: TransactionId
    }
}

impl TransactionError {
    pub fn invalid_transaction_type(transaction_type: &str) -> Self {
        Self::InvalidTransactionType { transaction_type: transaction_type.to_string() }
    }

    pub fn duplicate_transaction(transaction_id: TransactionId) -> Self {
        Self::DuplicateTransaction { transaction_id }
    }

    pub fn invalid_parent_transaction(transaction_id: TransactionId, parent_id: TransactionId) -> Self {
        Self::InvalidParentTransaction { transaction_id, parent_id }
    }

    pub fn invalid_transaction_id(transaction_id: TransactionId) -> Self {
        Self::InvalidTransactionId { transaction_id }
    }

    pub fn overflow(transaction_id: TransactionId) -> Self {
        Self::Overflow { transaction_id }
    }
}

impl From<StorageError> for TransactionError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::AlreadyPresent { transaction_id } => Self::duplicate_transaction(transaction_id)
        }
    }
}
