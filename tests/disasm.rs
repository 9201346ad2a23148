use minisa::disasm::fmt_decoded;
use minisa::program::DEMO;
use minisa::sim::is_halt;
use minisa::encode;

#[test]
fn demo_program_disassembles_to_its_source() {
    for text in DEMO.iter().filter(|t| !is_halt(t)) {
        let d = encode(text).unwrap().decode().unwrap();
        assert_eq!(fmt_decoded(&d), *text);
    }
}

#[test]
fn r0_source_disassembles_as_zero() {
    let d = encode("sub r3 r0").unwrap().decode().unwrap();
    assert_eq!(fmt_decoded(&d), "sub r3 0");
}
