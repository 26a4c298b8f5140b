mod errors;
mod record;
#[cfg(test)]
mod tests;
mod transaction;

pub use errors::TransactionError;
pub use record::TransactionRecord;
pub use transaction::Transaction;
