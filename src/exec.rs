use serde::{Deserialize, Serialize};

use crate::cpu::Cpu;
use crate::decoder::Decoded;
use crate::isa::Opcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Executed,
    /// Divisor resolved to zero; the target register was left untouched.
    DivByZeroSkipped,
}

pub trait Executor {
    fn exec(&self, cpu: &mut Cpu, d: Decoded) -> StepOutcome;
}

/// 32-bit wrapping integer semantics.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntExecutor;

impl Executor for IntExecutor {
    fn exec(&self, cpu: &mut Cpu, d: Decoded) -> StepOutcome {
        let a = cpu.reg(d.target);
        let b = cpu.operand_value(d.operand);
        let res = match d.op {
            Opcode::Mov => b,
            Opcode::Add => a.wrapping_add(b),
            Opcode::Sub => a.wrapping_sub(b),
            Opcode::Mul => a.wrapping_mul(b),
            Opcode::Div => match floor_div(a, b) {
                Some(q) => q,
                None => {
                    tracing::warn!(pc = cpu.pc, "divided by zero, instruction skipped");
                    return StepOutcome::DivByZeroSkipped;
                }
            },
        };
        cpu.set_reg(d.target, res);
        StepOutcome::Executed
    }
}

/// Division rounding toward negative infinity. `None` for a zero divisor.
pub fn floor_div(a: i32, b: i32) -> Option<i32> {
    if b == 0 {
        return None;
    }
    let q = a.wrapping_div(b);
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        Some(q - 1)
    } else {
        Some(q)
    }
}
