//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX, INY: Increment X / Y
//! - DEX, DEY: Decrement X / Y
//!
//! All of them wrap modulo 256 and update Z and N from the result.

use super::{effective_address, Flow};
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Operand, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Reads the byte at the effective address, adds one (wrapping) and writes
/// it back.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    modify_memory(cpu, metadata, operand, |value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at the effective address (wrapping on
/// underflow).
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    modify_memory(cpu, metadata, operand, |value| value.wrapping_sub(1))
}

fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
    op: impl FnOnce(u8) -> u8,
) -> Result<Flow, ExecutionError> {
    let addr = effective_address(metadata, operand)?;
    let result = op(cpu.memory.read(addr)?);
    cpu.memory.write(addr, result)?;
    cpu.flags.set_zn(result);
    Ok(Flow::NEXT)
}

/// Executes the INX (Increment X Register) instruction.
///
/// X = X + 1, wrapping 0xFF to 0x00. Updates Z and N from the new X.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.set_zn(cpu.x);
    Ok(Flow::NEXT)
}

/// Executes the INY (Increment Y Register) instruction.
///
/// Y = Y + 1, wrapping 0xFF to 0x00. Updates Z and N from the new Y.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.set_zn(cpu.y);
    Ok(Flow::NEXT)
}

/// Executes the DEX (Decrement X Register) instruction.
///
/// X = X - 1, wrapping 0x00 to 0xFF. Updates Z and N from the new X.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.set_zn(cpu.x);
    Ok(Flow::NEXT)
}

/// Executes the DEY (Decrement Y Register) instruction.
///
/// Y = Y - 1, wrapping 0x00 to 0xFF. Updates Z and N from the new Y.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.set_zn(cpu.y);
    Ok(Flow::NEXT)
}
