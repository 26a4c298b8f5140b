use crate::models::TransactionRecord;
use crate::service::TransactionService;
use crate::storage::Storage;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, warn};

/// Outcome counts of one ingestion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows saved as transactions.
    pub accepted: usize,
    /// Rows that decoded but failed validation.
    pub rejected: usize,
    /// Rows that could not be decoded.
    pub malformed: usize
}

/// Streams transaction rows from a CSV file into a [`TransactionService`].
pub struct IngestEngine<S: Storage> {
    service: Arc<TransactionService<S>>,
    backpressure: usize
}

impl<S: Storage> IngestEngine<S> {
    /// Creates a new engine that saves through the provided service.
    pub fn new(service: Arc<TransactionService<S>>) -> Self {
        Self {
            service,
            backpressure: 256
        }
    }

    /// Sets how many decoded rows may wait between the reader and the saver.
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads the CSV file at `path` and saves every row in file order.
    ///
    /// Rows are applied by a single consumer so a parent listed before its
    /// children is always stored first. A file that cannot be opened is logged
    /// and yields an empty summary.
    pub async fn run(&self, path: &Path) -> anyhow::Result<IngestSummary> {
        let (sender, receiver) = mpsc::channel::<TransactionRecord>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_path_buf(), sender);
        let mut summary = self.process_records(receiver).await;

        match csv_handle.await {
            Ok(malformed) => summary.malformed = malformed,
            Err(error) => error!("CSV ingestion failed: {error}")
        }

        Ok(summary)
    }

    fn spawn_csv_reader(&self, path: PathBuf, sender: mpsc::Sender<TransactionRecord>) -> JoinHandle<usize> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {} | {error}", path.display());
                    return 0;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            let mut malformed = 0;

            for result in reader.deserialize::<TransactionRecord>() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send(record).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        malformed += 1;
                        error!("CSV deserialization error: {error}");
                    }
                }
            }

            malformed
        })
    }

    async fn process_records(&self, mut receiver: mpsc::Receiver<TransactionRecord>) -> IngestSummary {
        let mut summary = IngestSummary::default();

        while let Some(record) = receiver.recv().await {
            let saved = self.service.save_transaction(
                record.transaction_id,
                &record.transaction_type,
                record.amount,
                record.parent_id
            );

            match saved {
                Ok(transaction) => {
                    summary.accepted += 1;
                    debug!("Row for transaction [{}] accepted", transaction.transaction_id);
                }
                Err(error) => {
                    summary.rejected += 1;
                    warn!("{error}");
                }
            }
        }

        summary
    }
}
