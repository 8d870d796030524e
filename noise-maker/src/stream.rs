use std::io::{self, Write};

use chrono::{DateTime, Duration, FixedOffset};
use rand::Rng;

use crate::generator::{LineShape, generate_access_log};

/// Writes `lines` access log lines to `out`, one second apart starting at `start`.
pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    lines: usize,
    start: DateTime<FixedOffset>,
    shape: LineShape,
) -> io::Result<()> {
    for i in 0..lines {
        let at = start + Duration::seconds(i as i64);
        writeln!(out, "{}", generate_access_log(rng, at, shape))?;
    }
    out.flush()
}
