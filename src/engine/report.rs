use std::io::Write;

use serde::Serialize;

use crate::models::TransactionError;
use crate::service::TransactionService;
use crate::storage::Storage;
use crate::types::{Amount, TransactionId};

/// One output line: a transaction and the total of its tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "tx")]
    pub transaction_id: TransactionId,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Amount,
    #[serde(rename = "parent")]
    pub parent_id: Option<TransactionId>,
    pub sum: Amount
}

/// Builds report rows in insertion order, optionally restricted to one type.
///
/// # Errors
/// Returns `InvalidTransactionType` for a blank filter, or the first failure
/// raised while summing a tree.
pub fn build_report<S: Storage>(service: &TransactionService<S>, transaction_type: Option<&str>) -> Result<Vec<ReportRow>, TransactionError> {
    let transactions = match transaction_type {
        Some(transaction_type) => service.transactions_of_type(transaction_type)?,
        None => service.transactions()
    };

    transactions.into_iter()
        .map(|transaction| -> Result<ReportRow, TransactionError> {
            let sum = service.total_amount_of_children(transaction.transaction_id)?;

            Ok(ReportRow {
                transaction_id: transaction.transaction_id,
                transaction_type: transaction.transaction_type,
                amount: transaction.amount,
                parent_id: transaction.parent_id,
                sum
            })
        })
        .collect()
}

/// Writes rows as CSV with a `tx,type,amount,parent,sum` header.
pub fn write_report<W: Write>(rows: &[ReportRow], output: W) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["tx", "type", "amount", "parent", "sum"])?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
