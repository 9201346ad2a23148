use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use minisa_disasm::{disassemble, load_raw_bin, parse_word};

#[derive(Parser, Debug)]
#[command(author, version, about = "minisa disassembler CLI", long_about = None)]
struct Cli {
    /// Little-endian binary of 32-bit words (as written by minisa-asm)
    #[arg(long, value_name = "BINFILE")]
    bin: Option<PathBuf>,
    /// Words to decode: 0x hex, 0b binary, 32 raw bits or decimal
    #[arg(value_name = "WORD")]
    words: Vec<String>,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show the 5/3/3/21 bit groups next to each instruction (text format only)
    #[arg(long)]
    show_bits: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut words = match &cli.bin {
        Some(path) => load_raw_bin(path)?,
        None => Vec::new(),
    };
    for w in &cli.words {
        words.push(parse_word(w)?);
    }
    anyhow::ensure!(!words.is_empty(), "nothing to disassemble: pass WORDs or --bin");

    let lines = disassemble(&words);
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
        OutputFormat::Text => {
            for l in &lines {
                let text = l.text.as_deref().unwrap_or(".word");
                if cli.show_bits {
                    println!("{:>4}: {:#010x}  {}  {}", l.index, l.word, l.encoding, text);
                } else {
                    println!("{:>4}: {:#010x}  {}", l.index, l.word, text);
                }
            }
        }
    }
    Ok(())
}
