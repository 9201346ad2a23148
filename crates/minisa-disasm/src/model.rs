use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use minisa::decoder::{Decoder, WordDecoder};
use minisa::disasm::fmt_decoded;
use minisa::EncodedInstruction;

/// One disassembled word. `text` is `None` when the opcode field is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub index: usize,
    pub word: u32,
    pub encoding: String,
    pub text: Option<String>,
}

/// Parses `0x` hex, `0b` binary or decimal. Underscores and inner spaces
/// are ignored so the report's `00000 010 000 ...` groups paste directly.
pub fn parse_word(s: &str) -> Result<u32> {
    let t: String = s.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        Ok(u32::from_str_radix(bin, 2)?)
    } else if t.len() == 32 && t.chars().all(|c| c == '0' || c == '1') {
        Ok(u32::from_str_radix(&t, 2)?)
    } else {
        Ok(t.parse::<u32>()?)
    }
}

/// Reads a file of little-endian 32-bit words.
pub fn load_raw_bin(path: &Path) -> Result<Vec<u32>> {
    let bytes = std::fs::read(path)?;
    anyhow::ensure!(
        bytes.len() % 4 == 0,
        "{}: size {} is not a multiple of 4",
        path.display(),
        bytes.len()
    );
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

pub fn disassemble(words: &[u32]) -> Vec<Line> {
    let dec = WordDecoder::new();
    words
        .iter()
        .enumerate()
        .map(|(index, &word)| {
            let text = match dec.decode(word) {
                Ok(d) => Some(fmt_decoded(&d)),
                Err(e) => {
                    tracing::warn!(index, word, "{e}");
                    None
                }
            };
            Line {
                index,
                word,
                encoding: EncodedInstruction(word).to_string(),
                text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_formats() {
        assert_eq!(parse_word("0x10").unwrap(), 16);
        assert_eq!(parse_word("0b101").unwrap(), 5);
        assert_eq!(parse_word("42").unwrap(), 42);
        assert_eq!(
            parse_word("00000 010 000 000000000000000100010").unwrap(),
            0x0200_0022
        );
        assert!(parse_word("zz").is_err());
    }

    #[test]
    fn loader_reads_le_words() {
        let path = std::env::temp_dir().join("_minisa_disasm_test.bin");
        std::fs::write(&path, [0x22u8, 0, 0, 2, 1, 0, 0, 0]).unwrap();
        let words = load_raw_bin(&path).unwrap();
        assert_eq!(words, vec![0x0200_0022, 1]);
        std::fs::write(&path, [0u8; 3]).unwrap();
        assert!(load_raw_bin(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unknown_opcode_has_no_text() {
        let lines = disassemble(&[0x0200_0022, 0xF800_0000]);
        assert_eq!(lines[0].text.as_deref(), Some("mov r2 34"));
        assert_eq!(lines[1].text, None);
    }
}
