mod ingest_engine;
mod report;

pub use ingest_engine::{IngestEngine, IngestSummary};
pub use report::{build_report, write_report, ReportRow};
