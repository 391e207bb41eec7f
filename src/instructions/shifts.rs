//! # Shift Instructions
//!
//! - LSR: Logical Shift Right, on the accumulator or on memory

use super::{effective_address, Flow};
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Operand, CPU};

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Shifts the accumulator or memory contents one bit right. Bit 0 goes to
/// the carry flag and bit 7 becomes 0, so N always ends up clear.
/// Updates C, Z, and N flags.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let result = if operand == Operand::Accumulator {
        let value = cpu.a;
        cpu.flags.carry = value & 0x01 != 0;
        cpu.a = value >> 1;
        cpu.a
    } else {
        // Read, shift, write back
        let addr = effective_address(metadata, operand)?;
        let value = cpu.memory.read(addr)?;
        cpu.flags.carry = value & 0x01 != 0;
        let result = value >> 1;
        cpu.memory.write(addr, result)?;
        result
    };

    cpu.flags.set_zn(result);
    Ok(Flow::NEXT)
}
