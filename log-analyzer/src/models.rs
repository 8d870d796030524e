use serde::Serialize;

use crate::{
    analytics::Tally,
    invariants::{ClientAddress, StatusCode},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub client_address: ClientAddress,
    pub user_id: String,
    pub username: String,
    /// Raw text between the square brackets, not interpreted.
    pub timestamp: String,
    /// Raw text between the double quotes, e.g. `GET /index.html HTTP/1.1`.
    pub request: String,
    pub status: StatusCode,
    pub size_bytes: u64,
}

/// Aggregate statistics over every accepted line of one log source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisSummary {
    pub total_requests: u64,
    /// Ordered by first occurrence in the source.
    pub status_counts: Tally<StatusCode>,
    pub total_bytes_transferred: u64,
    pub most_frequent_address: Option<ClientAddress>,
    pub most_frequent_address_count: u64,
}
