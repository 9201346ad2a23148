pub mod cpu;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod exec;
pub mod isa;
pub mod program;
pub mod report;
pub mod sim;

pub use cpu::{Cpu, Trap};
pub use encoder::{encode, EncodeError, EncodedInstruction, Instruction};
pub use isa::{Opcode, Operand, Reg};
pub use report::Report;
pub use sim::{run, Simulator};
