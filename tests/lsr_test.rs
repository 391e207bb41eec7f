//! Tests for the LSR (Logical Shift Right) instruction.

use emu6502::{MemoryBus, RamBus, CPU, RESET_VECTOR};

/// Helper function to create a running CPU with the reset vector at 0x0600
fn setup_cpu() -> CPU<RamBus> {
    let mut memory = RamBus::new();
    memory.write_word(RESET_VECTOR, 0x0600).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.reset().unwrap();
    cpu
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();

    // LSR A
    cpu.memory_mut().write(0x0600, 0x4A).unwrap();
    cpu.set_a(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flags().carry);
    assert!(!cpu.flags().zero);
    assert_eq!(cpu.pc(), 0x0601);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x4A).unwrap();
    cpu.set_a(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().carry);
    assert!(cpu.flags().zero);
}

#[test]
fn test_lsr_clears_negative() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0600, 0x4A).unwrap();
    cpu.set_a(0xFE);
    cpu.flags_mut().negative = true;

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flags().negative);
    assert!(!cpu.flags().carry);
}

#[test]
fn test_lsr_zero_page() {
    let mut cpu = setup_cpu();

    // LSR $10
    cpu.memory_mut().write(0x0600, 0x46).unwrap();
    cpu.memory_mut().write(0x0601, 0x10).unwrap();
    cpu.memory_mut().write(0x0010, 0x80).unwrap();
    cpu.set_a(0x55);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010).unwrap(), 0x40);
    assert_eq!(cpu.a(), 0x55);
    assert!(!cpu.flags().carry);
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_lsr_absolute_x() {
    let mut cpu = setup_cpu();

    // LSR $0300,X
    cpu.memory_mut().write(0x0600, 0x5E).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x03).unwrap();
    cpu.memory_mut().write(0x0302, 0x05).unwrap();
    cpu.set_x(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0302).unwrap(), 0x02);
    assert!(cpu.flags().carry);
    assert_eq!(cpu.pc(), 0x0603);
}
