use std::io::{stderr, stdout, BufWriter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_tree::engine::{build_report, write_report, IngestEngine};
use transaction_tree::service::TransactionService;
use transaction_tree::storage::TransactionStorage;

/// Loads transactions from a CSV file and prints each one with the total of its tree.
#[derive(Debug, Parser)]
#[command(name = "transaction-tree", version)]
struct Cli {
    /// CSV input with a `tx,type,amount,parent` header.
    input: PathBuf,

    /// One of: error, warn, info, debug, trace, off.
    #[arg(long, env = "TRANSACTION_TREE_LOG", default_value = "error")]
    log_level: LevelFilter,

    /// Only report transactions of this type.
    #[arg(long = "type")]
    transaction_type: Option<String>
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let storage = Arc::new(TransactionStorage::new());
    let service = Arc::new(TransactionService::new(storage));
    let engine = IngestEngine::new(service.clone());

    let timer = Instant::now();
    let summary = engine.run(&cli.input).await?;
    let duration = timer.elapsed();

    info!(
        "Ingested transactions in: {duration:?} | accepted [{}] rejected [{}] malformed [{}]",
        summary.accepted,
        summary.rejected,
        summary.malformed
    );

    let rows = build_report(&service, cli.transaction_type.as_deref())?;
    write_report(&rows, BufWriter::new(stdout().lock()))?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report owns stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
