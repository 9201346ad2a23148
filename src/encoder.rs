use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::isa::{
    field_to_imm, imm_to_field, Opcode, Operand, Reg, IMM_BITS, OPCODE_BITS, OPCODE_SHIFT, REG_BITS,
    SOURCE_SHIFT, TARGET_SHIFT,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),
    #[error("unknown register `{0}`")]
    UnknownRegister(String),
    #[error("malformed instruction `{text}`: expected 3 tokens, found {tokens}")]
    Malformed { text: String, tokens: usize },
}

/// One parsed textual instruction: `mnemonic target operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub op: Opcode,
    pub target: Reg,
    pub operand: Operand,
}

fn parse_operand(tok: &str) -> Result<Operand, EncodeError> {
    if let Some(r) = Reg::from_name(tok) {
        return Ok(Operand::Register(r));
    }
    // values wider than the field wrap to 21 bits
    let v = tok
        .parse::<i64>()
        .map_err(|_| EncodeError::UnknownRegister(tok.to_string()))?;
    Ok(Operand::Immediate(field_to_imm(imm_to_field(v))))
}

impl FromStr for Instruction {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let toks: Vec<&str> = s.split_whitespace().collect();
        let [mn, target, src] = toks.as_slice() else {
            return Err(EncodeError::Malformed {
                text: s.to_string(),
                tokens: toks.len(),
            });
        };
        let op =
            Opcode::from_mnemonic(mn).ok_or_else(|| EncodeError::UnknownMnemonic(mn.to_string()))?;
        let target =
            Reg::from_name(target).ok_or_else(|| EncodeError::UnknownRegister(target.to_string()))?;
        let operand = parse_operand(src)?;
        Ok(Self { op, target, operand })
    }
}

impl Instruction {
    pub fn encode(&self) -> EncodedInstruction {
        let (src, imm) = match self.operand {
            Operand::Register(r) => {
                if r == Reg::R0 {
                    tracing::debug!(op = %self.op, "r0 as source operand encodes as immediate 0");
                }
                (r.code() as u32, 0)
            }
            Operand::Immediate(v) => (Reg::R0.code() as u32, imm_to_field(v as i64)),
        };
        EncodedInstruction(
            (self.op.code() as u32) << OPCODE_SHIFT
                | (self.target.code() as u32) << TARGET_SHIFT
                | src << SOURCE_SHIFT
                | imm,
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.op, self.target, self.operand)
    }
}

/// A 32-bit encoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedInstruction(pub u32);

impl EncodedInstruction {
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The word as four bit strings of widths 5/3/3/21.
    pub fn bit_groups(self) -> [String; 4] {
        let bits = self.0.view_bits::<Msb0>();
        let o = OPCODE_BITS as usize;
        let t = o + REG_BITS as usize;
        let s = t + REG_BITS as usize;
        debug_assert_eq!(s + IMM_BITS as usize, 32);
        [
            bit_string(&bits[..o]),
            bit_string(&bits[o..t]),
            bit_string(&bits[t..s]),
            bit_string(&bits[s..]),
        ]
    }
}

fn bit_string(bits: &BitSlice<u32, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

impl fmt::Display for EncodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [op, t, s, imm] = self.bit_groups();
        // `pad` keeps width/alignment flags working in table layouts
        f.pad(&format!("{op} {t} {s} {imm}"))
    }
}

/// Encodes one textual instruction.
pub fn encode(text: &str) -> Result<EncodedInstruction, EncodeError> {
    Ok(text.parse::<Instruction>()?.encode())
}
