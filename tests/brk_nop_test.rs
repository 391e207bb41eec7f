//! Tests for the BRK (Force Break) and NOP instructions.

use emu6502::{CpuState, MemoryBus, RamBus, CPU, RESET_VECTOR};

/// Helper function to create a running CPU with the reset vector at 0x0600
fn setup_cpu() -> CPU<RamBus> {
    let mut memory = RamBus::new();
    memory.write_word(RESET_VECTOR, 0x0600).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_brk_sets_break_and_halts() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x00).unwrap();

    cpu.step().unwrap();

    assert!(cpu.flags().brk);
    assert_eq!(cpu.state(), CpuState::Halted);
    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.steps(), 1);
}

#[test]
fn test_step_after_brk_does_nothing() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x00).unwrap();
    cpu.memory_mut().write(0x0601, 0xE8).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.steps(), 1);
}

#[test]
fn test_reset_resumes_after_brk() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x00).unwrap();
    cpu.step().unwrap();

    cpu.reset().unwrap();

    assert_eq!(cpu.state(), CpuState::Running);
    assert!(!cpu.flags().brk);
    assert_eq!(cpu.pc(), 0x0600);
}

#[test]
fn test_nop_only_advances_pc() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0xEA).unwrap();
    cpu.set_a(0x12);
    let flags = cpu.flags();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.flags(), flags);
    assert_eq!(cpu.state(), CpuState::Running);
}
