//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//!
//! Every transfer updates Z and N from the destination register.

use super::Flow;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the accumulator into the X register. The source is left unchanged.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the new X is 0
/// - Negative (N): Set if bit 7 of the new X is set
/// - Other flags: Not affected
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.x = cpu.a;
    cpu.flags.set_zn(cpu.x);
    Ok(Flow::NEXT)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
///
/// Copies the accumulator into the Y register. The source is left unchanged.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the new Y is 0
/// - Negative (N): Set if bit 7 of the new Y is set
/// - Other flags: Not affected
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.y = cpu.a;
    cpu.flags.set_zn(cpu.y);
    Ok(Flow::NEXT)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
///
/// Copies the X register into the accumulator. The source is left unchanged.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the new A is 0
/// - Negative (N): Set if bit 7 of the new A is set
/// - Other flags: Not affected
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.a = cpu.x;
    cpu.flags.set_zn(cpu.a);
    Ok(Flow::NEXT)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
///
/// Copies the Y register into the accumulator. The source is left unchanged.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the new A is 0
/// - Negative (N): Set if bit 7 of the new A is set
/// - Other flags: Not affected
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    cpu.a = cpu.y;
    cpu.flags.set_zn(cpu.a);
    Ok(Flow::NEXT)
}
