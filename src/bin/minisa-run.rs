use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use minisa::{program, Simulator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Encode and run a minisa program, reporting cycles and CPI"
)]
struct Opts {
    /// Program file, one instruction per line (runs the built-in demo when omitted)
    #[arg(value_name = "PROGRAM")]
    input: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let lines: Vec<String> = match &opts.input {
        Some(path) => {
            let src = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            program::parse_lines(&src)
        }
        None => program::DEMO.iter().map(|s| s.to_string()).collect(),
    };

    let report = Simulator::new().run(&lines)?;
    let rendered = match opts.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json()? + "\n",
    };
    match opts.out {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}
