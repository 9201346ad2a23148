//! Static instruction set tables: opcodes, registers and their bit codes.
//!
//! Encoded instruction layout (32 bits, most significant first):
//!
//! ```text
//! opcode(5) | target(3) | source(3) | immediate(21)
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPCODE_BITS: u32 = 5;
pub const REG_BITS: u32 = 3;
pub const IMM_BITS: u32 = 21;

pub const OPCODE_SHIFT: u32 = REG_BITS + REG_BITS + IMM_BITS;
pub const TARGET_SHIFT: u32 = REG_BITS + IMM_BITS;
pub const SOURCE_SHIFT: u32 = IMM_BITS;

pub const OPCODE_MASK: u32 = (1 << OPCODE_BITS) - 1;
pub const REG_MASK: u32 = (1 << REG_BITS) - 1;
pub const IMM_MASK: u32 = (1 << IMM_BITS) - 1;

/// Tokens of the halt marker. Never encoded, never counted.
pub const SENTINEL: [&str; 3] = ["end", "0", "0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    Mov,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy)]
pub struct OpDesc {
    pub op: Opcode,
    pub mnemonic: &'static str,
    pub code: u8,
    pub cycles: u32,
}

pub const TABLE: &[OpDesc] = &[
    OpDesc {
        op: Opcode::Mov,
        mnemonic: "mov",
        code: 0b00000,
        cycles: 1,
    },
    OpDesc {
        op: Opcode::Add,
        mnemonic: "add",
        code: 0b00001,
        cycles: 1,
    },
    OpDesc {
        op: Opcode::Sub,
        mnemonic: "sub",
        code: 0b00010,
        cycles: 1,
    },
    OpDesc {
        op: Opcode::Mul,
        mnemonic: "mul",
        code: 0b00011,
        cycles: 4,
    },
    OpDesc {
        op: Opcode::Div,
        mnemonic: "div",
        code: 0b00100,
        cycles: 6,
    },
];

impl Opcode {
    pub const ALL: [Opcode; 5] = [
        Opcode::Mov,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
    ];

    fn desc(self) -> &'static OpDesc {
        // TABLE is ordered like the enum
        &TABLE[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }

    /// 5-bit opcode field value.
    pub fn code(self) -> u8 {
        self.desc().code
    }

    pub fn cycles(self) -> u32 {
        self.desc().cycles
    }

    pub fn from_mnemonic(s: &str) -> Option<Self> {
        TABLE.iter().find(|d| d.mnemonic == s).map(|d| d.op)
    }

    pub fn from_code(code: u8) -> Option<Self> {
        TABLE.iter().find(|d| d.code == code).map(|d| d.op)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// General purpose register `r0`..`r7`; the index doubles as its 3-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Reg(u8);

pub const NUM_REGS: usize = 8;

pub const REG_NAMES: [&str; NUM_REGS] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

impl Reg {
    pub const R0: Reg = Reg(0);

    pub fn new(code: u8) -> Option<Self> {
        ((code as usize) < NUM_REGS).then_some(Reg(code))
    }

    /// Register named by the low 3 bits of `v`.
    pub fn from_field(v: u32) -> Self {
        Reg((v & REG_MASK) as u8)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        REG_NAMES[self.index()]
    }

    pub fn from_name(s: &str) -> Option<Self> {
        REG_NAMES
            .iter()
            .position(|n| *n == s)
            .map(|i| Reg(i as u8))
    }

    pub fn all() -> impl Iterator<Item = Reg> {
        (0..NUM_REGS as u8).map(Reg)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Reg> for String {
    fn from(r: Reg) -> Self {
        r.name().to_string()
    }
}

impl TryFrom<String> for Reg {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Reg::from_name(&s).ok_or_else(|| format!("unknown register `{s}`"))
    }
}

/// Second operand of an instruction.
///
/// A source field of `000` always means "use the immediate", so `r0` can
/// never be read as a source register. `Register(Reg::R0)` survives parsing
/// but encodes as `Immediate(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Register(Reg),
    Immediate(i32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{r}"),
            Operand::Immediate(v) => write!(f, "{v}"),
        }
    }
}

/// Masks a signed value into the 21-bit two's-complement immediate field.
pub fn imm_to_field(v: i64) -> u32 {
    (v as u32) & IMM_MASK
}

/// Sign-extends a 21-bit immediate field.
pub fn field_to_imm(field: u32) -> i32 {
    let s = 32 - IMM_BITS;
    (((field & IMM_MASK) << s) as i32) >> s
}
