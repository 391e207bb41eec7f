//! Tests for the STY (Store Y Register) instruction.

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
fn test_sty_zero_page() {
    let mut cpu = setup_cpu();

    // STY $30
    cpu.memory_mut().write(0x0600, 0x84).unwrap();
    cpu.memory_mut().write(0x0601, 0x30).unwrap();
    cpu.set_y(0xAB);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0030).unwrap(), 0xAB);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();

    // STY $30,X
    cpu.memory_mut().write(0x0600, 0x94).unwrap();
    cpu.memory_mut().write(0x0601, 0x30).unwrap();
    cpu.set_x(0x05);
    cpu.set_y(0x12);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0035).unwrap(), 0x12);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup_cpu();

    // STY $0456
    cpu.memory_mut().write(0x0600, 0x8C).unwrap();
    cpu.memory_mut().write(0x0601, 0x56).unwrap();
    cpu.memory_mut().write(0x0602, 0x04).unwrap();
    cpu.set_y(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0456).unwrap(), 0x01);
    assert_eq!(cpu.pc(), 0x0603);
}
