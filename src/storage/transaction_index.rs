use crate::models::Transaction;
use crate::storage::StorageError;
use crate::types::TransactionId;
use std::collections::HashMap;

/// Keyed collection of transactions with secondary indexes by type and by parent.
///
/// All four structures are updated together by [`TransactionIndex::put`], so any
/// reader holding a reference sees either all of a transaction or none of it.
#[derive(Debug, Default)]
pub struct TransactionIndex {
    /// Primary index.
    transactions: HashMap<TransactionId, Transaction>,
    /// Every ID in the order it was inserted.
    insertion_order: Vec<TransactionId>,
    /// Type tag to IDs, in insertion order.
    by_type: HashMap<String, Vec<TransactionId>>,
    /// Parent ID to direct child IDs, in insertion order.
    children: HashMap<TransactionId, Vec<TransactionId>>
}

impl TransactionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, transaction_id: TransactionId) -> bool {
        self.transactions.contains_key(&transaction_id)
    }

    pub fn get(&self, transaction_id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&transaction_id)
    }

    /// All transactions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.resolve(Some(&self.insertion_order))
    }

    pub fn find_by_type(&self, transaction_type: &str) -> impl Iterator<Item = &Transaction> + '_ {
        self.resolve(self.by_type.get(transaction_type))
    }

    pub fn find_direct_children(&self, parent_id: TransactionId) -> impl Iterator<Item = &Transaction> + '_ {
        self.resolve(self.children.get(&parent_id))
    }

    /// Inserts a new transaction and registers it in every secondary index.
    ///
    /// # Errors
    /// Returns `StorageError::AlreadyPresent` if the ID is taken. The stored
    /// transaction is left untouched in that case.
    pub fn put(&mut self, transaction: Transaction) -> Result<(), StorageError> {
        let transaction_id = transaction.transaction_id;

        if self.transactions.contains_key(&transaction_id) {
            return Err(StorageError::already_present(transaction_id));
        }

        self.by_type.entry(transaction.transaction_type.clone())
            .or_default()
            .push(transaction_id);

        if let Some(parent_id) = transaction.parent_id {
            self.children.entry(parent_id).or_default().push(transaction_id);
        }

        self.insertion_order.push(transaction_id);
        self.transactions.insert(transaction_id, transaction);

        Ok(())
    }

    fn resolve<'a>(&'a self, ids: Option<&'a Vec<TransactionId>>) -> impl Iterator<Item = &'a Transaction> + 'a {
        ids.into_iter()
            .flatten()
            .filter_map(|transaction_id| self.transactions.get(transaction_id))
    }
}
