use crate::cpu::{Cpu, Trap};
use crate::decoder::{Decoder, WordDecoder};
use crate::exec::{Executor, IntExecutor};
use crate::isa::SENTINEL;
use crate::report::{Report, TraceRow};

/// True for the halt marker `end 0 0` (compared token-wise).
pub fn is_halt(text: &str) -> bool {
    text.split_whitespace().eq(SENTINEL)
}

/// Drives a program through a decoder/executor pair.
#[derive(Debug, Default, Clone)]
pub struct Simulator<D = WordDecoder, X = IntExecutor> {
    dec: D,
    exec: X,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Decoder, X: Executor> Simulator<D, X> {
    pub fn with_parts(dec: D, exec: X) -> Self {
        Self { dec, exec }
    }

    /// Runs `program` from a fresh state until it ends or hits the halt
    /// marker. Any trap aborts the run and no report is produced.
    pub fn run<S: AsRef<str>>(&self, program: &[S]) -> Result<Report, Trap> {
        let mut cpu = Cpu::new();
        let rows = self.run_on(&mut cpu, program)?;
        Report::new(rows, &cpu)
    }

    /// Like [`run`](Self::run) but executes against a caller-owned state and
    /// returns only the trace rows.
    pub fn run_on<S: AsRef<str>>(
        &self,
        cpu: &mut Cpu,
        program: &[S],
    ) -> Result<Vec<TraceRow>, Trap> {
        let mut rows = Vec::with_capacity(program.len());
        while cpu.pc < program.len() {
            let text: &str = program[cpu.pc].as_ref();
            if is_halt(text) {
                tracing::debug!(pc = cpu.pc, "halt");
                break;
            }
            let step = cpu.step(text, &self.dec, &self.exec)?;
            rows.push(TraceRow::new(text, &step));
        }
        Ok(rows)
    }
}

/// Runs `program` with the default decoder and executor.
pub fn run<S: AsRef<str>>(program: &[S]) -> Result<Report, Trap> {
    Simulator::new().run(program)
}
