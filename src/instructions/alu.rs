//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit Test
//!
//! Decimal mode is not emulated; ADC and SBC are always binary.

use std::cmp::Ordering;

use super::{read_operand, Flow};
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, Operand, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator and updates C, Z,
/// V and N. With the `arithmetic_ignores_carry` quirk the carry is neither
/// consumed nor produced, and only Z and N are updated.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;

    if cpu.quirks.arithmetic_ignores_carry {
        cpu.a = cpu.a.wrapping_add(value);
        cpu.flags.set_zn(cpu.a);
    } else {
        add_with_carry(cpu, value);
    }

    Ok(Flow::NEXT)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). On the 6502 this is ADC of the operand's one's
/// complement, so C ends up set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;

    if cpu.quirks.arithmetic_ignores_carry {
        cpu.a = cpu.a.wrapping_sub(value);
        cpu.flags.set_zn(cpu.a);
    } else {
        add_with_carry(cpu, !value);
    }

    Ok(Flow::NEXT)
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flags.carry as u16;
    let result = sum as u8;

    cpu.flags.carry = sum > 0xFF;
    // Both inputs share a sign that the result does not.
    cpu.flags.overflow = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.a = result;
    cpu.flags.set_zn(result);
}

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M; updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    cpu.a &= value;
    cpu.flags.set_zn(cpu.a);
    Ok(Flow::NEXT)
}

pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    let register = cpu.a;
    compare(cpu, register, value);
    Ok(Flow::NEXT)
}

pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    let register = cpu.x;
    compare(cpu, register, value);
    Ok(Flow::NEXT)
}

pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    let register = cpu.y;
    compare(cpu, register, value);
    Ok(Flow::NEXT)
}

/// Three-way compare: exactly one of Z (equal), C (greater), N (less) ends up set.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let ordering = register.cmp(&value);
    cpu.flags.zero = ordering == Ordering::Equal;
    cpu.flags.carry = ordering == Ordering::Greater;
    cpu.flags.negative = ordering == Ordering::Less;
}

/// Executes the BIT (Bit Test) instruction.
///
/// - Zero (Z): Set if A & M = 0
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    operand: Operand,
) -> Result<Flow, ExecutionError> {
    let value = read_operand(cpu, metadata, operand)?;
    cpu.flags.zero = cpu.a & value == 0;
    cpu.flags.negative = value & 0x80 != 0;
    cpu.flags.overflow = value & 0x40 != 0;
    Ok(Flow::NEXT)
}
