//! # Flag Instructions
//!
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag

use super::Flow;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Addressing Mode: Implicit
/// Opcode: 0x18
///
/// Flags affected:
/// - C: Set to 0
/// - All other flags: Unchanged
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.flags.carry = false;
    Ok(Flow::NEXT)
}

/// Executes the SEC (Set Carry Flag) instruction.
///
/// Addressing Mode: Implicit
/// Opcode: 0x38
///
/// Flags affected:
/// - C: Set to 1
/// - All other flags: Unchanged
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.flags.carry = true;
    Ok(Flow::NEXT)
}
