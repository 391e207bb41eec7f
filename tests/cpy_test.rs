//! Tests for the CPY (Compare Y Register) instruction.

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
fn test_cpy_immediate_less() {
    let mut cpu = setup_cpu();

    // CPY #$20
    cpu.memory_mut().write(0x0600, 0xC0).unwrap();
    cpu.memory_mut().write(0x0601, 0x20).unwrap();
    cpu.set_y(0x1F);

    cpu.step().unwrap();

    assert!(cpu.flags().negative);
    assert!(!cpu.flags().zero);
    assert!(!cpu.flags().carry);
}

#[test]
fn test_cpy_zero_page_equal() {
    let mut cpu = setup_cpu();

    // CPY $10
    cpu.memory_mut().write(0x0600, 0xC4).unwrap();
    cpu.memory_mut().write(0x0601, 0x10).unwrap();
    cpu.memory_mut().write(0x0010, 0x33).unwrap();
    cpu.set_y(0x33);

    cpu.step().unwrap();

    assert!(cpu.flags().zero);
}

#[test]
fn test_cpy_absolute_greater() {
    let mut cpu = setup_cpu();

    // CPY $0400
    cpu.memory_mut().write(0x0600, 0xCC).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x04).unwrap();
    cpu.memory_mut().write(0x0400, 0x00).unwrap();
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert!(cpu.flags().carry);
    assert!(!cpu.flags().negative);
    assert_eq!(cpu.pc(), 0x0603);
}
