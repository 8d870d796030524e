use std::fmt;

use crate::models::AnalysisSummary;

/// Human readable report, one field per line.
pub struct TextReport<'a>(pub &'a AnalysisSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Log Analysis Report:")?;
        writeln!(f, "Total Requests: {}", summary.total_requests)?;
        writeln!(f, "Status Codes:")?;
        for (status, count) in summary.status_counts.iter() {
            writeln!(f, "  {status}: {count}")?;
        }
        writeln!(
            f,
            "Total Data Transferred: {} bytes",
            summary.total_bytes_transferred
        )?;
        match &summary.most_frequent_address {
            Some(address) => writeln!(
                f,
                "Most Frequent IP: {address} ({} requests)",
                summary.most_frequent_address_count
            ),
            None => writeln!(f, "Most Frequent IP: none (0 requests)"),
        }
    }
}

pub fn render_text(summary: &AnalysisSummary) -> String {
    TextReport(summary).to_string()
}

pub fn render_json(summary: &AnalysisSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
