use minisa::exec::StepOutcome;
use minisa::{run, Reg};

fn r(name: &str) -> Reg {
    Reg::from_name(name).unwrap()
}

#[test]
fn divide_by_zero_immediate_is_skipped() {
    let report = run(&["mov r1 12", "div r1 0", "add r1 1"]).unwrap();
    assert_eq!(report.value(r("r1")), 13);
    assert_eq!(report.rows[1].outcome, StepOutcome::DivByZeroSkipped);
    // still charged
    assert_eq!(report.summary.total_cycles, 1 + 6 + 1);
    assert_eq!(report.summary.total_instructions, 3);
}

#[test]
fn divide_by_zero_register_is_skipped() {
    let report = run(&["mov r1 -12", "div r1 r2", "div r1 r1"]).unwrap();
    assert_eq!(report.value(r("r1")), 1);
    let outcomes: Vec<StepOutcome> = report.rows.iter().map(|row| row.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            StepOutcome::Executed,
            StepOutcome::DivByZeroSkipped,
            StepOutcome::Executed
        ]
    );
}

#[test]
fn division_floors_toward_negative_infinity() {
    let report = run(&[
        "mov r1 -7",
        "div r1 2",
        "mov r2 7",
        "div r2 -2",
        "mov r3 -7",
        "div r3 -2",
        "mov r4 7",
        "mov r5 2",
        "div r4 r5",
    ])
    .unwrap();
    assert_eq!(report.value(r("r1")), -4);
    assert_eq!(report.value(r("r2")), -4);
    assert_eq!(report.value(r("r3")), 3);
    assert_eq!(report.value(r("r4")), 3);
}
