//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use super::{effective_address, read_operand, Flow};
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Operand, StatusFlags, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    cpu.a = value;
    cpu.flags.set_zn(value);
    Ok(Flow::NEXT)
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, applied to X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    cpu.x = value;
    cpu.flags.set_zn(value);
    Ok(Flow::NEXT)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, applied to Y.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    cpu.y = value;
    cpu.flags.set_zn(value);
    Ok(Flow::NEXT)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. No flags are affected,
/// unless the `sta_clears_flags` quirk is on, in which case every flag is
/// reset to false after the store.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let addr = effective_address(metadata, operand)?;
    cpu.memory.write(addr, cpu.a)?;

    if cpu.quirks.sta_clears_flags {
        cpu.flags = StatusFlags::default();
    }

    Ok(Flow::NEXT)
}

/// Executes the STX (Store X Register) instruction. No flags are affected.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let addr = effective_address(metadata, operand)?;
    cpu.memory.write(addr, cpu.x)?;
    Ok(Flow::NEXT)
}

/// Executes the STY (Store Y Register) instruction. No flags are affected.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let addr = effective_address(metadata, operand)?;
    cpu.memory.write(addr, cpu.y)?;
    Ok(Flow::NEXT)
}
