//! Summary statistics for web-server access logs in the common log format.
//!
//! [`analyze_file`] reads a log source line by line, keeps every line that
//! fits the grammar and silently drops the rest, and folds the accepted
//! entries into one [`AnalysisSummary`].

pub mod analytics;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

use std::path::Path;

pub use analytics::{Aggregator, Tally, aggregate};
pub use error::AnalyzeError;
pub use ingest::{LogLines, open_log};
pub use invariants::{ClientAddress, StatusCode};
pub use models::{AnalysisSummary, LogEntry};
pub use parser::parse_log_line;

/// Opens, parses and aggregates the log at `path`.
///
/// Fails with [`AnalyzeError::SourceNotFound`] when `path` does not exist; no
/// partial summary is produced in that case.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<AnalysisSummary, AnalyzeError> {
    let path = path.as_ref();
    let mut aggregator = Aggregator::default();
    let mut lines_read = 0u64;
    let mut discarded = 0u64;
    for line in open_log(path)? {
        let line = line?;
        lines_read += 1;
        match parse_log_line(&line) {
            Some(entry) => aggregator.record(&entry),
            None => {
                discarded += 1;
                tracing::trace!(line = lines_read, "discarding malformed line");
            }
        }
    }
    tracing::debug!(
        path = %path.display(),
        lines_read,
        discarded,
        "finished reading log source"
    );
    Ok(aggregator.finish())
}
