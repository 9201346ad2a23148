use minisa::{encode, run, Cpu, EncodeError, Simulator, Trap};

#[test]
fn unknown_mnemonic() {
    assert_eq!(
        encode("jmp r1 4"),
        Err(EncodeError::UnknownMnemonic("jmp".into()))
    );
}

#[test]
fn unknown_registers() {
    assert_eq!(
        encode("mov r8 4"),
        Err(EncodeError::UnknownRegister("r8".into()))
    );
    assert_eq!(
        encode("add r1 x3"),
        Err(EncodeError::UnknownRegister("x3".into()))
    );
    assert_eq!(
        encode("add r1 4.5"),
        Err(EncodeError::UnknownRegister("4.5".into()))
    );
}

#[test]
fn malformed_token_counts() {
    for (text, tokens) in [("", 0), ("mov", 1), ("mov r1", 2), ("mov r1 2 3", 4)] {
        assert_eq!(
            encode(text),
            Err(EncodeError::Malformed {
                text: text.into(),
                tokens
            })
        );
    }
}

#[test]
fn encode_failure_aborts_the_run_with_its_pc() {
    let err = run(&["mov r1 1", "mov r1 2", "mvo r1 3", "mov r1 4"]).unwrap_err();
    assert_eq!(
        err,
        Trap::Encode {
            pc: 2,
            source: EncodeError::UnknownMnemonic("mvo".into())
        }
    );
}

#[test]
fn failing_instruction_mutates_nothing() {
    let mut cpu = Cpu::new();
    let sim = Simulator::new();
    let err = sim.run_on(&mut cpu, &["mov r1 1", "add r9 1"]).unwrap_err();
    assert!(matches!(err, Trap::Encode { pc: 1, .. }));
    assert_eq!(cpu.gpr, [0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(cpu.cycles, 1);
    assert_eq!(cpu.retired, 1);
    assert_eq!(cpu.pc, 1);
}

#[test]
fn empty_programs_are_degenerate() {
    let empty: [&str; 0] = [];
    assert_eq!(run(&empty).unwrap_err(), Trap::DegenerateProgram);
    assert_eq!(run(&["end 0 0", "mov r1 1"]).unwrap_err(), Trap::DegenerateProgram);
}
