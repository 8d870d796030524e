use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use log_analyzer::{AnalyzeError, analyze_file, report};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summarise a web server access log", long_about = None)]
struct Args {
    /// Access log in the common log format.
    #[arg(default_value = "access.log")]
    path: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let summary = match analyze_file(&args.path) {
        Ok(summary) => summary,
        Err(e @ AnalyzeError::SourceNotFound { .. }) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match args.format {
        Format::Text => print!("{}", report::render_text(&summary)),
        Format::Json => println!("{}", report::render_json(&summary)?),
    }
    Ok(ExitCode::SUCCESS)
}
