//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and resolves each
//! of them to an effective operand for the instruction at the program counter.
//!
//! Resolution never touches the operand itself: it only reads the operand
//! bytes that follow the opcode (and, for the indirect modes, the pointer they
//! name). Loading from or storing to the effective address is left to the
//! instruction.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Example: LSR A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (target is the address after the branch plus the offset)
    Relative,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($0120) (jump to the address stored at 0x0120/0x0121)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Effective operand produced by resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The instruction takes no operand (implicit mode).
    None,

    /// The instruction operates on the accumulator.
    Accumulator,

    /// The operand lives at (or, for jumps and branches, is) this address.
    ///
    /// For immediate mode this is the address of the operand byte itself.
    Address(u16),
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` for the instruction whose opcode sits at the current PC.
    ///
    /// Zero-page index arithmetic wraps modulo 256; absolute index arithmetic
    /// wraps modulo 65536.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressingMode, MemoryBus, Operand, RamBus, CPU};
    ///
    /// let mut cpu = CPU::new(RamBus::new());
    /// cpu.set_pc(0x0005);
    /// cpu.memory_mut().write(0x0006, 0xFD).unwrap(); // -3
    ///
    /// let target = cpu.resolve_operand(AddressingMode::Relative).unwrap();
    /// assert_eq!(target, Operand::Address(0x0004));
    /// ```
    pub fn resolve_operand(&self, mode: AddressingMode) -> Result<Operand, ExecutionError> {
        let operand_addr = self.pc.wrapping_add(1);

        let operand = match mode {
            AddressingMode::Implicit => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Address(operand_addr),
            AddressingMode::ZeroPage => {
                Operand::Address(self.memory.read(operand_addr)? as u16)
            }
            AddressingMode::ZeroPageX => {
                let base = self.memory.read(operand_addr)?;
                Operand::Address(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.memory.read(operand_addr)?;
                Operand::Address(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.memory.read_word(operand_addr)?),
            AddressingMode::AbsoluteX => {
                let base = self.memory.read_word(operand_addr)?;
                Operand::Address(base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.memory.read_word(operand_addr)?;
                Operand::Address(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Relative => {
                let offset = self.memory.read(operand_addr)? as i8;
                let next = self.pc.wrapping_add(2);
                Operand::Address(next.wrapping_add_signed(offset as i16))
            }
            AddressingMode::Indirect => {
                let pointer = self.memory.read_word(operand_addr)?;
                Operand::Address(self.memory.read_word(pointer)?)
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(operand_addr)?.wrapping_add(self.x);
                Operand::Address(self.memory.read_word(zp as u16)?)
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(operand_addr)?;
                if self.quirks.indirect_y_indexes_pointer {
                    // Y is folded into the zero-page pointer before the dereference.
                    let indexed = zp.wrapping_add(self.y);
                    Operand::Address(self.memory.read_word(indexed as u16)?)
                } else {
                    let base = self.memory.read_word(zp as u16)?;
                    Operand::Address(base.wrapping_add(self.y as u16))
                }
            }
        };

        Ok(operand)
    }
}
