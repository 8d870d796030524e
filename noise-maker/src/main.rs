mod args;
mod generator;
mod stream;

use std::{
    fs::File,
    io::{self, BufWriter},
};

use anyhow::Context;
use args::CliArgs;
use chrono::Local;
use clap::Parser;
use generator::LineShape;
use rand::{SeedableRng, rngs::StdRng};
use stream::write_log_stream;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let shape = LineShape {
        dash_ratio: *args.dash_ratio(),
        malformed_ratio: *args.malformed_ratio(),
    };
    let start = Local::now().fixed_offset();

    match args.output() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_log_stream(&mut out, &mut rng, *args.lines(), start, shape)?;
            eprintln!("Wrote {} log lines to {}", args.lines(), path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            write_log_stream(&mut out, &mut rng, *args.lines(), start, shape)?;
        }
    }
    Ok(())
}
