//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Break
//!
//! JSR pushes the address of its own last byte (high byte first), and RTS
//! pops it back and adds one, so the pair round-trips to the instruction
//! following the JSR.

use super::{effective_address, Flow};
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Operand, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The operand has already been resolved, including the pointer dereference
/// for the indirect form, so PC is simply replaced.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    cpu.pc = effective_address(metadata, operand)?;
    Ok(Flow::JUMPED)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC + 2 (the last byte of the JSR) onto the stack, high byte
/// first, then jumps to the target.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let target = effective_address(metadata, operand)?;
    let return_address = cpu.pc.wrapping_add(metadata.size_bytes as u16 - 1);

    cpu.push((return_address >> 8) as u8)?;
    cpu.push(return_address as u8)?;

    cpu.pc = target;
    Ok(Flow::JUMPED)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the low then high byte of the return address and resumes one byte
/// past it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    let low = cpu.pop()? as u16;
    let high = cpu.pop()? as u16;

    cpu.pc = ((high << 8) | low).wrapping_add(1);
    Ok(Flow::JUMPED)
}

/// Executes the BRK (Force Break) instruction.
///
/// Sets the break flag. No interrupt sequence is emulated: the step driver
/// sees the flag, advances PC past the opcode and halts the CPU.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.flags.brk = true;
    Ok(Flow::NEXT)
}
