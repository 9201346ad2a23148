use serde::Serialize;
use std::fmt;

use crate::cpu::{Cpu, Step, Trap};
use crate::encoder::EncodedInstruction;
use crate::exec::StepOutcome;
use crate::isa::{Opcode, Reg};

const RULE: &str =
    "----------------------------------------------------------------------------";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRow {
    pub pc: usize,
    pub text: String,
    pub op: Opcode,
    pub word: u32,
    pub encoding: String,
    pub cycles: u32,
    pub outcome: StepOutcome,
}

impl TraceRow {
    pub fn new(text: &str, step: &Step) -> Self {
        Self {
            pc: step.pc,
            text: text.trim().to_string(),
            op: step.decoded.op,
            word: step.word,
            encoding: EncodedInstruction(step.word).to_string(),
            cycles: step.cycles,
            outcome: step.outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_cycles: u64,
    pub total_instructions: u64,
    /// Cycles per instruction, rounded to two decimals.
    pub cpi: f64,
}

impl Summary {
    pub fn new(total_cycles: u64, total_instructions: u64) -> Result<Self, Trap> {
        if total_instructions == 0 {
            return Err(Trap::DegenerateProgram);
        }
        let cpi = total_cycles as f64 / total_instructions as f64;
        Ok(Self {
            total_cycles,
            total_instructions,
            cpi: (cpi * 100.0).round() / 100.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterDump {
    pub reg: Reg,
    pub value: i32,
    pub bits: String,
}

impl RegisterDump {
    pub fn new(reg: Reg, value: i32) -> Self {
        Self {
            reg,
            value,
            bits: format!("{:032b}", value as u32),
        }
    }
}

/// Everything a finished run produced. Only built for runs that did not trap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<TraceRow>,
    pub summary: Summary,
    pub registers: Vec<RegisterDump>,
}

impl Report {
    pub fn new(rows: Vec<TraceRow>, cpu: &Cpu) -> Result<Self, Trap> {
        let summary = Summary::new(cpu.cycles, cpu.retired)?;
        let registers = Reg::all().map(|r| RegisterDump::new(r, cpu.reg(r))).collect();
        Ok(Self {
            rows,
            summary,
            registers,
        })
    }

    pub fn value(&self, r: Reg) -> i32 {
        self.registers[r.index()].value
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "  PC  | {:<20} | {:<36} | {:>6}",
            "Instruction", "Binary encoding", "Cycles"
        )?;
        writeln!(f, "{RULE}")?;
        for row in &self.rows {
            writeln!(
                f,
                " {:>4} | {:<20} | {:<36} | {:>6}",
                row.pc, row.text, row.encoding, row.cycles
            )?;
            if row.outcome == StepOutcome::DivByZeroSkipped {
                writeln!(f, "Divided by zero, skip the instruction {}", row.pc)?;
            }
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Execution Completed!")?;
        writeln!(f)?;
        let s = &self.summary;
        writeln!(
            f,
            "Total Cycle counts after executing all the instructions = {}",
            s.total_cycles
        )?;
        writeln!(f, "Total Instruction counts = {}", s.total_instructions)?;
        writeln!(f, "CPI = {:.2}", s.cpi)?;
        writeln!(f)?;
        writeln!(f, "After executing instructions, each register contains -")?;
        for d in &self.registers {
            writeln!(
                f,
                " {:03b} ({})  | {:<16} | {}",
                d.reg.code(),
                d.reg,
                d.value,
                d.bits
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpi_rounds_to_two_decimals() {
        let s = Summary::new(15, 7).unwrap();
        assert_eq!(s.cpi, 2.14);
        let s = Summary::new(2, 3).unwrap();
        assert_eq!(s.cpi, 0.67);
    }

    #[test]
    fn zero_instructions_is_degenerate() {
        assert_eq!(Summary::new(0, 0), Err(Trap::DegenerateProgram));
    }

    #[test]
    fn register_bits_are_twos_complement() {
        let d = RegisterDump::new(Reg::from_field(2), -9);
        assert_eq!(d.bits, "11111111111111111111111111110111");
        let d = RegisterDump::new(Reg::from_field(1), 5);
        assert_eq!(d.bits, "00000000000000000000000000000101");
    }
}
