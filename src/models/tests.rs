use super::{Transaction, TransactionError, TransactionRecord};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use csv::{ReaderBuilder, Trim};

use crate::storage::StorageError;
use crate::types::Amount;

fn read_records(csv_content: &str) -> Vec<csv::Result<TransactionRecord>> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(csv_content.as_bytes())
        .deserialize::<TransactionRecord>()
        .collect()
}

#[test]
fn test_record_with_parent_deserializes() -> Result<()> {
    let mut records = read_records("tx,type,amount,parent\n2, parts , 1200.50 , 1");
    let record = records.pop().ok_or_else(|| anyhow!("Record missing"))??;

    assert_eq!(record.transaction_id, 2);
    assert_eq!(record.transaction_type, "parts");
    assert_eq!(record.amount, Amount::from_str("1200.50")?);
    assert_eq!(record.parent_id, Some(1));

    Ok(())
}

#[test]
fn test_record_without_parent_is_a_root() -> Result<()> {
    let records = read_records("tx,type,amount,parent\n1,cars,5000,\n3,cars,10");

    assert_eq!(records.len(), 2);

    for record in records {
        assert_eq!(record?.parent_id, None);
    }

    Ok(())
}

#[test]
fn test_record_with_empty_type_is_kept_for_validation() -> Result<()> {
    let mut records = read_records("tx,type,amount,parent\n3,,5000,");
    let record = records.pop().ok_or_else(|| anyhow!("Record missing"))??;

    assert!(record.transaction_type.is_empty());

    Ok(())
}

#[test]
fn test_record_with_unparseable_fields_fails() {
    let records = read_records("tx,type,amount,parent\n1,cars,ten,\nx,cars,10,");

    assert!(records.iter().all(|record| record.is_err()));
}

#[test]
fn test_type_validation_rejects_blank_tags() {
    assert!(Transaction::is_valid_type("cars"));
    assert!(Transaction::is_valid_type(" some-type "));
    assert!(!Transaction::is_valid_type(""));
    assert!(!Transaction::is_valid_type("   "));
}

#[test]
fn test_storage_conflict_maps_to_duplicate_transaction() {
    let error: TransactionError = StorageError::already_present(7).into();

    assert_eq!(error, TransactionError::duplicate_transaction(7));
    assert_eq!(error.to_string(), "Duplicate transaction [7]");
}

#[test]
fn test_error_messages_name_the_offending_ids() {
    assert_eq!(
        TransactionError::invalid_parent_transaction(3, 4).to_string(),
        "Parent transaction [4] of transaction [3] was not found"
    );
    assert_eq!(TransactionError::invalid_transaction_id(17).to_string(), "Transaction [17] was not found");
}
