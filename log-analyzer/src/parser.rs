use std::sync::LazyLock;

use regex::Regex;

use crate::models::LogEntry;

// 127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+) (\S+) (\S+) \[(.*?)\] "(.*?)" ([0-9]{3}) ([0-9]+|-)"#)
        .expect("valid access log pattern")
});

/// Parses one access log line. Lines that do not fit the grammar yield `None`.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let caps = LINE_PATTERN.captures(line)?;
    let client_address = caps[1].parse().ok()?;
    let status = caps[6].parse().ok()?;
    Some(LogEntry {
        client_address,
        user_id: caps[2].to_string(),
        username: caps[3].to_string(),
        timestamp: caps[4].to_string(),
        request: caps[5].to_string(),
        status,
        size_bytes: parse_size(&caps[7]),
    })
}

fn parse_size(field: &str) -> u64 {
    if field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().unwrap_or(0)
    } else {
        0
    }
}
