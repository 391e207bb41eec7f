//! # Opcode Decode Table
//!
//! This module contains the 256-entry decode table mapping each opcode byte
//! to its instruction metadata. The table is built once at compile time and
//! is read-only thereafter; opcodes without an entry are undefined and fail
//! to decode.
//!
//! Each entry records:
//! - Mnemonic (instruction kind)
//! - Addressing mode
//! - Instruction size in bytes, including the opcode

use std::fmt;

use crate::addressing::AddressingMode;
use crate::ExecutionError;

/// Instruction kinds understood by the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Rts,
    Sbc,
    Sec,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Txa => "TXA",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{decode, AddressingMode, Mnemonic};
///
/// let lda_imm = decode(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction kind.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }
}

/// Decode table indexed by opcode byte; `None` marks an undefined opcode.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the metadata for `opcode`.
///
/// # Examples
///
/// ```
/// use emu6502::{decode, ExecutionError};
///
/// assert_eq!(decode(0x02), Err(ExecutionError::UnsupportedOpcode(0x02)));
/// ```
pub fn decode(opcode: u8) -> Result<&'static OpcodeMetadata, ExecutionError> {
    OPCODE_TABLE[opcode as usize]
        .as_ref()
        .ok_or(ExecutionError::UnsupportedOpcode(opcode))
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < DEFINED_OPCODES.len() {
        let (opcode, mnemonic, mode) = DEFINED_OPCODES[i];
        table[opcode as usize] = Some(OpcodeMetadata::new(mnemonic, mode));
        i += 1;
    }
    table
}

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implicit, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use Mnemonic::*;

#[rustfmt::skip]
const DEFINED_OPCODES: [(u8, Mnemonic, AddressingMode); 108] = [
    // Loads
    (0xA9, Lda, Immediate), (0xA5, Lda, ZeroPage), (0xB5, Lda, ZeroPageX), (0xAD, Lda, Absolute),
    (0xBD, Lda, AbsoluteX), (0xB9, Lda, AbsoluteY), (0xA1, Lda, IndirectX), (0xB1, Lda, IndirectY),
    (0xA2, Ldx, Immediate), (0xA6, Ldx, ZeroPage), (0xB6, Ldx, ZeroPageY), (0xAE, Ldx, Absolute),
    (0xBE, Ldx, AbsoluteY),
    (0xA0, Ldy, Immediate), (0xA4, Ldy, ZeroPage), (0xB4, Ldy, ZeroPageX), (0xAC, Ldy, Absolute),
    (0xBC, Ldy, AbsoluteX),

    // Stores
    (0x85, Sta, ZeroPage), (0x95, Sta, ZeroPageX), (0x8D, Sta, Absolute), (0x9D, Sta, AbsoluteX),
    (0x99, Sta, AbsoluteY), (0x81, Sta, IndirectX), (0x91, Sta, IndirectY),
    (0x86, Stx, ZeroPage), (0x96, Stx, ZeroPageY), (0x8E, Stx, Absolute),
    (0x84, Sty, ZeroPage), (0x94, Sty, ZeroPageX), (0x8C, Sty, Absolute),

    // Transfers
    (0xAA, Tax, Implicit), (0x8A, Txa, Implicit), (0xA8, Tay, Implicit), (0x98, Tya, Implicit),

    // Increments and decrements
    (0xE8, Inx, Implicit), (0xCA, Dex, Implicit), (0xC8, Iny, Implicit), (0x88, Dey, Implicit),
    (0xE6, Inc, ZeroPage), (0xF6, Inc, ZeroPageX), (0xEE, Inc, Absolute), (0xFE, Inc, AbsoluteX),
    (0xC6, Dec, ZeroPage), (0xD6, Dec, ZeroPageX), (0xCE, Dec, Absolute), (0xDE, Dec, AbsoluteX),

    // Logic and shifts
    (0x29, And, Immediate), (0x25, And, ZeroPage), (0x35, And, ZeroPageX), (0x2D, And, Absolute),
    (0x3D, And, AbsoluteX), (0x39, And, AbsoluteY), (0x21, And, IndirectX), (0x31, And, IndirectY),
    (0x4A, Lsr, Accumulator), (0x46, Lsr, ZeroPage), (0x56, Lsr, ZeroPageX), (0x4E, Lsr, Absolute),
    (0x5E, Lsr, AbsoluteX),
    (0x24, Bit, ZeroPage), (0x2C, Bit, Absolute),

    // Arithmetic
    (0x69, Adc, Immediate), (0x65, Adc, ZeroPage), (0x75, Adc, ZeroPageX), (0x6D, Adc, Absolute),
    (0x7D, Adc, AbsoluteX), (0x79, Adc, AbsoluteY), (0x61, Adc, IndirectX), (0x71, Adc, IndirectY),
    (0xE9, Sbc, Immediate), (0xE5, Sbc, ZeroPage), (0xF5, Sbc, ZeroPageX), (0xED, Sbc, Absolute),
    (0xFD, Sbc, AbsoluteX), (0xF9, Sbc, AbsoluteY), (0xE1, Sbc, IndirectX), (0xF1, Sbc, IndirectY),

    // Comparisons
    (0xC9, Cmp, Immediate), (0xC5, Cmp, ZeroPage), (0xD5, Cmp, ZeroPageX), (0xCD, Cmp, Absolute),
    (0xDD, Cmp, AbsoluteX), (0xD9, Cmp, AbsoluteY), (0xC1, Cmp, IndirectX), (0xD1, Cmp, IndirectY),
    (0xE0, Cpx, Immediate), (0xE4, Cpx, ZeroPage), (0xEC, Cpx, Absolute),
    (0xC0, Cpy, Immediate), (0xC4, Cpy, ZeroPage), (0xCC, Cpy, Absolute),

    // Flags
    (0x18, Clc, Implicit), (0x38, Sec, Implicit),

    // Branches
    (0x10, Bpl, Relative), (0x30, Bmi, Relative), (0x50, Bvc, Relative), (0x70, Bvs, Relative),
    (0x90, Bcc, Relative), (0xB0, Bcs, Relative), (0xD0, Bne, Relative), (0xF0, Beq, Relative),

    // Control flow
    (0x4C, Jmp, Absolute), (0x6C, Jmp, Indirect), (0x20, Jsr, Absolute), (0x60, Rts, Implicit),
    (0x00, Brk, Implicit), (0xEA, Nop, Implicit),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_opcode_defined_twice() {
        let mut seen = [false; 256];
        for (opcode, _, _) in DEFINED_OPCODES.iter() {
            assert!(!seen[*opcode as usize], "opcode 0x{:02X} listed twice", opcode);
            seen[*opcode as usize] = true;
        }
    }

    #[test]
    fn test_table_matches_definitions() {
        let defined = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
        assert_eq!(defined, DEFINED_OPCODES.len());
    }

    #[test]
    fn test_decode_brk() {
        let brk = decode(0x00).unwrap();
        assert_eq!(brk.mnemonic, Mnemonic::Brk);
        assert_eq!(brk.addressing_mode, AddressingMode::Implicit);
        assert_eq!(brk.size_bytes, 1);
    }

    #[test]
    fn test_decode_undefined() {
        for opcode in [0x02, 0x03, 0xFF, 0x9C, 0x6A] {
            assert_eq!(decode(opcode), Err(ExecutionError::UnsupportedOpcode(opcode)));
        }
    }

    #[test]
    fn test_mnemonic_display() {
        assert_eq!(Mnemonic::Lda.to_string(), "LDA");
        assert_eq!(format!("{}", Mnemonic::Bne), "BNE");
    }
}
