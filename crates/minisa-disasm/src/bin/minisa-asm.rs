use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use minisa::program::parse_lines;
use minisa::sim::is_halt;

#[derive(Parser, Debug)]
#[command(author, version, about = "minisa assembler: text program to little-endian words")]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(short, long)]
    input: PathBuf,
    /// Output binary file (little-endian)
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let src = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let mut out = Vec::new();
    for (n, line) in parse_lines(&src).iter().enumerate() {
        // the halt marker has no encoding; nothing after it runs
        if is_halt(line) {
            break;
        }
        let word = minisa::encode(line).with_context(|| format!("instruction {n}: `{line}`"))?;
        out.extend_from_slice(&word.raw().to_le_bytes());
    }
    fs::write(&opts.output, &out)?;
    println!("wrote {} words to {}", out.len() / 4, opts.output.display());
    Ok(())
}
