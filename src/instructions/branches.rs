//! # Branch Instructions
//!
//! This module implements the conditional branch operations:
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//!
//! All branches use relative addressing. The target is resolved before
//! execution as PC + 2 + signed offset, so a taken branch only has to
//! assign PC. No flags are affected.

use super::{effective_address, Flow};
use crate::{ExecutionError, MemoryBus, Mnemonic, OpcodeMetadata, Operand, CPU};

/// Executes any of the eight conditional branches.
///
/// Returns [`Flow::JUMPED`] when the branch is taken, so the step driver
/// leaves PC at the target. Otherwise PC advances past the 2-byte instruction.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let target = effective_address(metadata, operand)?;

    let taken = match metadata.mnemonic {
        Mnemonic::Bpl => !cpu.flags.negative,
        Mnemonic::Bmi => cpu.flags.negative,
        Mnemonic::Bvc => !cpu.flags.overflow,
        Mnemonic::Bvs => cpu.flags.overflow,
        Mnemonic::Bcc => !cpu.flags.carry,
        Mnemonic::Bcs => cpu.flags.carry,
        Mnemonic::Bne => !cpu.flags.zero,
        Mnemonic::Beq => cpu.flags.zero,
        other => unreachable!("{:?} dispatched as a branch", other),
    };

    if taken {
        cpu.pc = target;
        Ok(Flow::JUMPED)
    } else {
        Ok(Flow::NEXT)
    }
}
