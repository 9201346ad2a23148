use serde::{Deserialize, Serialize};

use crate::decoder::{DecodeError, Decoded, Decoder};
use crate::encoder::{EncodeError, Instruction};
use crate::exec::{Executor, StepOutcome};
use crate::isa::{Operand, Reg, NUM_REGS};

/// Mutable machine state for one run. Every run starts from a fresh `Cpu`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub pc: usize,           // index into the program
    pub cycles: u64,         // accumulated cycle cost
    pub retired: u64,        // instructions encoded and executed
    pub gpr: [i32; NUM_REGS],
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Trap {
    #[error("cannot encode instruction at pc {pc}: {source}")]
    Encode {
        pc: usize,
        #[source]
        source: EncodeError,
    },
    #[error("cannot decode instruction at pc {pc}: {source}")]
    Decode {
        pc: usize,
        #[source]
        source: DecodeError,
    },
    #[error("program has no instructions before the halt marker; CPI is undefined")]
    DegenerateProgram,
}

/// One executed instruction as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub pc: usize,
    pub word: u32,
    pub decoded: Decoded,
    pub cycles: u32,
    pub outcome: StepOutcome,
}

impl Cpu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reg(&self, r: Reg) -> i32 {
        self.gpr[r.index()]
    }

    pub fn set_reg(&mut self, r: Reg, v: i32) {
        self.gpr[r.index()] = v;
    }

    /// Value an operand resolves to right now.
    pub fn operand_value(&self, operand: Operand) -> i32 {
        match operand {
            Operand::Register(r) => self.reg(r),
            Operand::Immediate(v) => v,
        }
    }

    /// Encodes, decodes, charges and executes the instruction at `self.pc`,
    /// then advances the pc.
    pub fn step<D: Decoder, X: Executor>(
        &mut self,
        text: &str,
        dec: &D,
        exec: &X,
    ) -> Result<Step, Trap> {
        let pc = self.pc;
        let word = text
            .parse::<Instruction>()
            .map_err(|source| Trap::Encode { pc, source })?
            .encode()
            .raw();
        let d = dec
            .decode(word)
            .map_err(|source| Trap::Decode { pc, source })?;
        // charged before execution, so a skipped division still costs its cycles
        let cycles = d.op.cycles();
        self.cycles += u64::from(cycles);
        self.retired += 1;
        tracing::debug!(pc, op = %d.op, cycles, "step");
        let outcome = exec.exec(self, d);
        self.pc = pc + 1;
        Ok(Step {
            pc,
            word,
            decoded: d,
            cycles,
            outcome,
        })
    }
}
