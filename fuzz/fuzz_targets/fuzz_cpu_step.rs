//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and RAM image, then runs a handful of
//! steps. Errors are fine; panics and broken invariants are not.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{CpuState, MemoryBus, Quirks, RamBus, CPU, RAM_SIZE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    carry: bool,
    zero: bool,
    overflow: bool,
    negative: bool,
    reference_quirks: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Program bytes, copied to the start of the program area.
    program: Vec<u8>,
    /// Zero page contents (pointer tables for the indirect modes)
    zero_page: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = RamBus::new();

    for (i, &byte) in input.zero_page.iter().enumerate() {
        let _ = memory.write(i as u16, byte);
    }

    let quirks = if input.cpu_state.reference_quirks {
        Quirks::REFERENCE
    } else {
        Quirks::HARDWARE
    };
    let mut cpu = CPU::with_quirks(memory, quirks);

    let program = &input.program[..input.program.len().min(RAM_SIZE - 0x0600)];
    if cpu.load(program).is_err() || cpu.reset().is_err() {
        return;
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    if input.cpu_state.pc < RAM_SIZE as u16 {
        cpu.set_pc(input.cpu_state.pc);
    }
    let flags = cpu.flags_mut();
    flags.carry = input.cpu_state.carry;
    flags.zero = input.cpu_state.zero;
    flags.overflow = input.cpu_state.overflow;
    flags.negative = input.cpu_state.negative;

    let before = cpu.steps();
    let result = cpu.run_steps(64);

    // The step counter only moves forward, one per retired instruction.
    assert!(cpu.steps() >= before);
    if let Ok(executed) = result {
        assert_eq!(cpu.steps() - before, executed);
    }
    if cpu.state() == CpuState::Halted {
        assert!(cpu.flags().brk);
    }
});
