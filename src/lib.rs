//! # 6502 Instruction-Set Emulation Core
//!
//! A small, table-driven 6502 emulator core: a fetch-decode-execute loop, an
//! opcode decode table, addressing-mode resolution, status-flag computation,
//! stack discipline, and a byte-addressable memory bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{RamBus, CPU};
//!
//! let mut cpu = CPU::new(RamBus::new());
//!
//! // LDA #$C0, TAX, INX, BRK
//! cpu.execute_at(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00], 0x0600).unwrap();
//!
//! assert_eq!(cpu.a(), 0xC0);
//! assert_eq!(cpu.x(), 0xC1);
//! assert_eq!(cpu.pc(), 0x0605);
//! assert!(cpu.flags().brk);
//! ```
//!
//! ## Host Seams
//!
//! Hosts that render or pace execution drive the core through two calls:
//!
//! - [`CPU::step`] executes exactly one instruction
//! - [`MemoryBus::read_range`] (or [`RamBus::window`]) samples a window of bus memory
//!
//! The Break flag (`cpu.flags().brk`) tells the host when to stop stepping.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, state machine and the step driver
//! - `memory` - MemoryBus trait and the RAM-backed bus
//! - `opcodes` - Opcode decode table
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - Processor status flags
//! - `quirks` - Switches for reference-compatible behavior

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod quirks;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{CpuState, CPU, DEFAULT_PROGRAM_ADDRESS, STACK_BASE};
pub use memory::{MemoryBus, RamBus, RAM_SIZE, RESET_VECTOR};
pub use opcodes::{decode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use quirks::Quirks;
pub use status::StatusFlags;

/// Errors that can occur during CPU execution.
///
/// Every variant is fatal: once returned from [`CPU::step`] the emulated
/// program state can no longer be trusted and the host should stop stepping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode byte has no entry in the decode table.
    #[error("unsupported opcode 0x{0:02X}")]
    UnsupportedOpcode(u8),

    /// The instruction cannot operate on the operand produced by its addressing mode.
    #[error("{mnemonic} does not support {mode:?} addressing")]
    UnsupportedAddressingMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },

    /// A bus access fell outside the modeled address space.
    #[error("address 0x{0:04X} is outside the modeled memory")]
    OutOfRangeAddress(u16),

    /// `step()` was called before `reset()` moved the CPU into the running state.
    #[error("CPU has not been reset")]
    NotRunning,
}
