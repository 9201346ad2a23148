use serde::{Deserialize, Serialize};

use crate::encoder::EncodedInstruction;
use crate::isa::{
    field_to_imm, Opcode, Operand, Reg, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, SOURCE_SHIFT,
    TARGET_SHIFT,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown opcode {code:#07b}")]
    UnknownOpcode { code: u8 },
}

/// Fields recovered from an encoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Opcode,
    pub target: Reg,
    pub operand: Operand,
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError>;
}

/// Decoder for the 5/3/3/21 word layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordDecoder;

impl WordDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for WordDecoder {
    fn decode(&self, raw32: u32) -> Result<Decoded, DecodeError> {
        let code = ((raw32 >> OPCODE_SHIFT) & OPCODE_MASK) as u8;
        let op = Opcode::from_code(code).ok_or(DecodeError::UnknownOpcode { code })?;
        let target = Reg::from_field(raw32 >> TARGET_SHIFT);
        let source = Reg::from_field(raw32 >> SOURCE_SHIFT);
        // an all-zero source field selects the immediate
        let operand = if source == Reg::R0 {
            Operand::Immediate(field_to_imm(raw32 & IMM_MASK))
        } else {
            Operand::Register(source)
        };
        Ok(Decoded { op, target, operand })
    }
}

impl EncodedInstruction {
    pub fn decode(self) -> Result<Decoded, DecodeError> {
        WordDecoder.decode(self.0)
    }
}
