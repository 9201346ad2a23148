use pretty_assertions::assert_eq;

use minisa::program::DEMO;
use minisa::run;

#[test]
fn demo_report_text() {
    let text = run(DEMO).unwrap().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[1],
        "  PC  | Instruction          | Binary encoding                      | Cycles"
    );
    assert_eq!(
        lines[3],
        "    0 | mov r2 34            | 00000 010 000 000000000000000100010  |      1"
    );
    assert_eq!(
        lines[9],
        "    6 | div r5 5             | 00100 101 000 000000000000000000101  |      6"
    );
    assert!(text.contains("Total Cycle counts after executing all the instructions = 15\n"));
    assert!(text.contains("Total Instruction counts = 7\n"));
    assert!(text.contains("CPI = 2.14\n"));
    let regs: Vec<&str> = lines[lines.len() - 8..].to_vec();
    assert_eq!(
        regs[0],
        " 000 (r0)  | 0                | 00000000000000000000000000000000"
    );
    assert_eq!(
        regs[2],
        " 010 (r2)  | -9               | 11111111111111111111111111110111"
    );
    assert_eq!(
        regs[5],
        " 101 (r5)  | -18              | 11111111111111111111111111101110"
    );
}

#[test]
fn skipped_division_is_noted_in_text() {
    let text = run(&["mov r1 3", "div r1 0"]).unwrap().to_string();
    assert!(text.contains("Divided by zero, skip the instruction 1\n"));
}

#[test]
fn json_report_shape() {
    let json = run(DEMO).unwrap().to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["summary"]["total_cycles"], 15);
    assert_eq!(v["summary"]["cpi"], 2.14);
    assert_eq!(v["rows"].as_array().unwrap().len(), 7);
    assert_eq!(v["rows"][4]["op"], "mul");
    assert_eq!(v["rows"][0]["outcome"], "executed");
    assert_eq!(v["registers"][4]["reg"], "r4");
    assert_eq!(v["registers"][4]["value"], -90);
}
