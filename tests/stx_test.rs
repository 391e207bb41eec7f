//! Tests for the STX (Store X Register) instruction.

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
fn test_stx_zero_page() {
    let mut cpu = setup_cpu();

    // STX $20
    cpu.memory_mut().write(0x0600, 0x86).unwrap();
    cpu.memory_mut().write(0x0601, 0x20).unwrap();
    cpu.set_x(0x7F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0020).unwrap(), 0x7F);
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    // STX $FF,Y with Y = 2 wraps to $01
    cpu.memory_mut().write(0x0600, 0x96).unwrap();
    cpu.memory_mut().write(0x0601, 0xFF).unwrap();
    cpu.set_x(0x31);
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001).unwrap(), 0x31);
}

#[test]
fn test_stx_absolute_does_not_touch_flags() {
    let mut cpu = setup_cpu();

    // STX $0400
    cpu.memory_mut().write(0x0600, 0x8E).unwrap();
    cpu.memory_mut().write(0x0601, 0x00).unwrap();
    cpu.memory_mut().write(0x0602, 0x04).unwrap();
    cpu.set_x(0x00);
    let before = cpu.flags();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0400).unwrap(), 0x00);
    assert_eq!(cpu.flags(), before);
    assert_eq!(cpu.pc(), 0x0603);
}
