//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of the supported instructions,
//! organized by category. Each instruction is a standalone function taking
//! the CPU, the decoded opcode metadata and the resolved operand, and
//! returning a [`Flow`] that tells the step driver whether the instruction
//! set PC itself.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Logical shift right (LSR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, BRK, NOP)
//! - **flags**: Status flag manipulation (CLC, SEC)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod transfer;

use crate::{ExecutionError, MemoryBus, Mnemonic, OpcodeMetadata, Operand, CPU};

/// Program-counter outcome of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flow {
    /// The instruction set PC; the driver must not add the instruction size.
    pub did_jump: bool,
}

impl Flow {
    pub const NEXT: Flow = Flow { did_jump: false };
    pub const JUMPED: Flow = Flow { did_jump: true };
}

/// Executes one decoded instruction.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    use Mnemonic::*;

    match metadata.mnemonic {
        Lda => load_store::execute_lda(cpu, metadata, operand),
        Ldx => load_store::execute_ldx(cpu, metadata, operand),
        Ldy => load_store::execute_ldy(cpu, metadata, operand),
        Sta => load_store::execute_sta(cpu, metadata, operand),
        Stx => load_store::execute_stx(cpu, metadata, operand),
        Sty => load_store::execute_sty(cpu, metadata, operand),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),

        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),
        Inc => inc_dec::execute_inc(cpu, metadata, operand),
        Dec => inc_dec::execute_dec(cpu, metadata, operand),

        And => alu::execute_and(cpu, metadata, operand),
        Adc => alu::execute_adc(cpu, metadata, operand),
        Sbc => alu::execute_sbc(cpu, metadata, operand),
        Cmp => alu::execute_cmp(cpu, metadata, operand),
        Cpx => alu::execute_cpx(cpu, metadata, operand),
        Cpy => alu::execute_cpy(cpu, metadata, operand),
        Bit => alu::execute_bit(cpu, metadata, operand),

        Lsr => shifts::execute_lsr(cpu, metadata, operand),

        Clc => flags::execute_clc(cpu),
        Sec => flags::execute_sec(cpu),

        Bpl | Bmi | Bvc | Bvs | Bcc | Bcs | Bne | Beq => {
            branches::execute_branch(cpu, metadata, operand)
        }

        Jmp => control::execute_jmp(cpu, metadata, operand),
        Jsr => control::execute_jsr(cpu, metadata, operand),
        Rts => control::execute_rts(cpu),
        Brk => control::execute_brk(cpu),
        Nop => Ok(Flow::NEXT),
    }
}

/// Extracts the effective address, rejecting operand shapes without one.
pub(crate) fn effective_address(
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<u16, ExecutionError> {
    match operand {
        Operand::Address(addr) => Ok(addr),
        Operand::None | Operand::Accumulator => Err(ExecutionError::UnsupportedAddressingMode {
            mnemonic: metadata.mnemonic,
            mode: metadata.addressing_mode,
        }),
    }
}

/// Reads the byte an instruction operates on.
pub(crate) fn read_operand<M: MemoryBus>(
    cpu: &CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<u8, ExecutionError> {
    let addr = effective_address(metadata, operand)?;
    cpu.memory.read(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressingMode, RamBus};

    #[test]
    fn test_effective_address_rejects_implicit() {
        let metadata = OpcodeMetadata {
            mnemonic: Mnemonic::Lda,
            addressing_mode: AddressingMode::Implicit,
            size_bytes: 1,
        };

        assert_eq!(
            effective_address(&metadata, Operand::None),
            Err(ExecutionError::UnsupportedAddressingMode {
                mnemonic: Mnemonic::Lda,
                mode: AddressingMode::Implicit,
            })
        );
    }

    #[test]
    fn test_load_with_accumulator_operand_is_rejected() {
        let mut cpu = CPU::new(RamBus::new());
        let metadata = OpcodeMetadata {
            mnemonic: Mnemonic::Lda,
            addressing_mode: AddressingMode::Accumulator,
            size_bytes: 1,
        };

        let result = execute(&mut cpu, &metadata, Operand::Accumulator);

        assert!(matches!(
            result,
            Err(ExecutionError::UnsupportedAddressingMode {
                mnemonic: Mnemonic::Lda,
                ..
            })
        ));
    }

    #[test]
    fn test_nop_falls_through() {
        let mut cpu = CPU::new(RamBus::new());
        let metadata = OpcodeMetadata {
            mnemonic: Mnemonic::Nop,
            addressing_mode: AddressingMode::Implicit,
            size_bytes: 1,
        };

        assert_eq!(execute(&mut cpu, &metadata, Operand::None), Ok(Flow::NEXT));
    }
}
