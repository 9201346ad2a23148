use crate::decoder::Decoded;

/// Canonical textual form, e.g. `mov r2 34` or `sub r2 r3`.
pub fn fmt_decoded(d: &Decoded) -> String {
    format!("{} {} {}", d.op, d.target, d.operand)
}
