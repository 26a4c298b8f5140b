use crate::storage::{Storage, TransactionIndex};
use std::sync::{PoisonError, RwLock};

/// In-memory transaction store guarded by a single reader-writer lock.
pub struct TransactionStorage {
    index: RwLock<TransactionIndex>
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            index: RwLock::new(TransactionIndex::new())
        }
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for TransactionStorage {
    fn read<R>(&self, operation: impl FnOnce(&TransactionIndex) -> R) -> R {
        //NOTE: Writers validate before they mutate, so a poisoned lock still guards a consistent index
        let index = self.index.read().unwrap_or_else(PoisonError::into_inner);
        operation(&index)
    }

    fn write<R>(&self, operation: impl FnOnce(&mut TransactionIndex) -> R) -> R {
        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);
        operation(&mut index)
    }
}
