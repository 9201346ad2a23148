/// The seven-instruction demo program: 15 cycles, CPI 2.14.
pub const DEMO: &[&str] = &[
    "mov r2 34",
    "mov r3 43",
    "sub r2 r3",
    "mov r4 r2",
    "mul r4 10",
    "mov r5 r4",
    "div r5 5",
    "end 0 0",
];

/// Splits program text into instruction lines.
///
/// Blank lines and lines starting with `#` or `;` are dropped; a trailing
/// `;` comment is stripped.
pub fn parse_lines(src: &str) -> Vec<String> {
    src.lines()
        .filter_map(|line| {
            let ls = line.trim_start();
            if ls.starts_with('#') {
                return None;
            }
            let s = match ls.find(';') {
                Some(p) => &ls[..p],
                None => ls,
            };
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        })
        .collect()
}
