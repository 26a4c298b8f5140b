mod errors;
mod transaction_index;
mod transaction_storage;

use crate::models::Transaction;
use crate::types::TransactionId;

pub use errors::StorageError;
pub use transaction_index::TransactionIndex;
pub use transaction_storage::TransactionStorage;

/// Shared access to a [`TransactionIndex`].
///
/// `read` scopes may run concurrently with each other; a `write` scope is
/// exclusive, so a check-then-insert done inside one is atomic.
pub trait Storage: Send + Sync + 'static {
    fn read<R>(&self, operation: impl FnOnce(&TransactionIndex) -> R) -> R;
    fn write<R>(&self, operation: impl FnOnce(&mut TransactionIndex) -> R) -> R;

    fn get(&self, transaction_id: TransactionId) -> Option<Transaction> {
        self.read(|index| index.get(transaction_id).cloned())
    }

    fn put(&self, transaction: Transaction) -> Result<(), StorageError> {
        self.write(|index| index.put(transaction))
    }

    fn find_by_type(&self, transaction_type: &str) -> Vec<Transaction> {
        self.read(|index| index.find_by_type(transaction_type).cloned().collect())
    }

    fn find_direct_children(&self, parent_id: TransactionId) -> Vec<Transaction> {
        self.read(|index| index.find_direct_children(parent_id).cloned().collect())
    }

    fn all(&self) -> Vec<Transaction> {
        self.read(|index| index.iter().cloned().collect())
    }
}
