use std::sync::Arc;

use tracing::debug;

use crate::models::{Transaction, TransactionError};
use crate::storage::Storage;
use crate::types::{Amount, TransactionId};

/// Validates and records transactions, and answers queries over their trees.
///
/// The service is the only writer of its storage. Every failure it returns is
/// a deterministic function of the input and the current contents of the store.
pub struct TransactionService<S: Storage> {
    storage: Arc<S>
}

impl<S: Storage> TransactionService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn transaction_by_id(&self, transaction_id: TransactionId) -> Option<Transaction> {
        self.storage.get(transaction_id)
    }

    /// Returns every transaction tagged `transaction_type`, in insertion order.
    ///
    /// # Errors
    /// Returns `TransactionError::InvalidTransactionType` if the type is blank.
    pub fn transactions_of_type(&self, transaction_type: &str) -> Result<Vec<Transaction>, TransactionError> {
        if !Transaction::is_valid_type(transaction_type) {
            return Err(TransactionError::invalid_transaction_type(transaction_type));
        }

        Ok(self.storage.find_by_type(transaction_type))
    }

    /// Returns every stored transaction, in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.storage.all()
    }

    /// Validates and stores a new transaction.
    ///
    /// Checks run in a fixed order and the first failure wins: the type, then
    /// the uniqueness of the ID, then the existence of the parent. The last two
    /// and the insert happen under one exclusive storage scope.
    ///
    /// # Errors
    /// - `InvalidTransactionType` if the type is blank.
    /// - `DuplicateTransaction` if the ID is already stored.
    /// - `InvalidParentTransaction` if `parent_id` does not resolve.
    pub fn save_transaction(
        &self,
        transaction_id: TransactionId,
        transaction_type: &str,
        amount: Amount,
        parent_id: Option<TransactionId>
    ) -> Result<Transaction, TransactionError> {
        if !Transaction::is_valid_type(transaction_type) {
            return Err(TransactionError::invalid_transaction_type(transaction_type));
        }

        let transaction = Transaction {
            transaction_id,
            transaction_type: transaction_type.to_string(),
            amount,
            parent_id
        };

        self.storage.write(|index| -> Result<(), TransactionError> {
            if index.contains(transaction_id) {
                return Err(TransactionError::duplicate_transaction(transaction_id));
            }

            if let Some(parent_id) = parent_id {
                if !index.contains(parent_id) {
                    return Err(TransactionError::invalid_parent_transaction(transaction_id, parent_id));
                }
            }

            index.put(transaction.clone())?;

            Ok(())
        })?;

        debug!("Transaction [{}]:[{}] saved with parent [{:?}]", transaction.transaction_id, transaction.transaction_type, transaction.parent_id);

        Ok(transaction)
    }

    /// Sums the amount of a transaction and of every transaction below it.
    ///
    /// The tree is walked depth first with an explicit stack. Parents always
    /// exist before their children, so the walk visits each node once and ends.
    ///
    /// # Errors
    /// - `InvalidTransactionId` if no transaction has `transaction_id`.
    /// - `Overflow` if the total leaves the exact decimal range.
    pub fn total_amount_of_children(&self, transaction_id: TransactionId) -> Result<Amount, TransactionError> {
        self.storage.read(|index| -> Result<Amount, TransactionError> {
            let root = index.get(transaction_id)
                .ok_or_else(|| TransactionError::invalid_transaction_id(transaction_id))?;

            let mut total = root.amount;
            let mut pending: Vec<&Transaction> = index.find_direct_children(transaction_id).collect();

            while let Some(transaction) = pending.pop() {
                total = total.checked_add(transaction.amount)
                    .ok_or_else(|| TransactionError::overflow(transaction_id))?;

                pending.extend(index.find_direct_children(transaction.transaction_id));
            }

            Ok(total)
        })
    }
}
