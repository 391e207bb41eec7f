//! Tests for the JMP (Jump) instruction.

use emu6502::{ExecutionError, MemoryBus, RamBus, CPU, RESET_VECTOR};

/// Helper function to create a running CPU with the reset vector at 0x0600
fn setup_cpu() -> CPU<RamBus> {
    let mut memory = RamBus::new();
    memory.write_word(RESET_VECTOR, 0x0600).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();

    // JMP $0300
    cpu.memory_mut().write(0x0600, 0x4C).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x03).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0300);
    assert_eq!(cpu.steps(), 1);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();

    // JMP ($0020)
    cpu.memory_mut().write(0x0600, 0x6C).unwrap();
    cpu.memory_mut().write(0x0601, 0x20).unwrap();
    cpu.memory_mut().write(0x0602, 0x00).unwrap();
    cpu.memory_mut().write_word(0x0020, 0x0456).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0456);
}

#[test]
fn test_jmp_leaves_flags_alone() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x4C).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x03).unwrap();
    cpu.flags_mut().carry = true;
    let before = cpu.flags();

    cpu.step().unwrap();

    assert_eq!(cpu.flags(), before);
}

#[test]
fn test_jmp_outside_ram_fails_on_next_fetch() {
    let mut cpu = setup_cpu();

    // JMP $0900 succeeds; the fetch at $0900 does not
    cpu.memory_mut().write(0x0600, 0x4C).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x09).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0900);

    assert_eq!(cpu.step(), Err(ExecutionError::OutOfRangeAddress(0x0900)));
}
