use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake access logs for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of lines cut off before the closing quote of the request.
    #[arg(long, default_value_t = 0.0, value_parser = parse_ratio)]
    malformed_ratio: f64,

    /// Fraction of lines whose size field is `-`.
    #[arg(long, default_value_t = 0.05, value_parser = parse_ratio)]
    dash_ratio: f64,
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}
