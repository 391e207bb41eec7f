//! # Behavior Quirks
//!
//! Some programs were written against a simplified 6502 that deviates from
//! NMOS hardware in three places. Each deviation is a switch on [`Quirks`],
//! chosen when the CPU is built:
//!
//! - **STA clears flags**: after storing A, every status flag is reset to false
//! - **Arithmetic ignores carry**: ADC/SBC add or subtract the operand modulo
//!   256, without the incoming carry, and leave Carry and Overflow untouched
//! - **IndirectY indexes the pointer**: `($zp),Y` adds Y to the zero-page
//!   pointer before dereferencing it instead of adding Y to the fetched address
//!
//! [`Quirks::HARDWARE`] (the default) turns all of them off.
//! [`Quirks::REFERENCE`] turns all of them on.

/// Switches selecting reference-compatible behavior over NMOS hardware behavior.
///
/// # Examples
///
/// ```
/// use emu6502::{Quirks, RamBus, CPU};
///
/// let cpu = CPU::with_quirks(RamBus::new(), Quirks::REFERENCE);
/// assert!(cpu.quirks().sta_clears_flags);
///
/// let cpu = CPU::new(RamBus::new());
/// assert_eq!(cpu.quirks(), Quirks::HARDWARE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// STA resets every status flag to false after the store.
    pub sta_clears_flags: bool,

    /// ADC/SBC ignore the incoming carry and do not compute Carry or Overflow.
    pub arithmetic_ignores_carry: bool,

    /// `($zp),Y` adds Y to the zero-page pointer before the dereference.
    pub indirect_y_indexes_pointer: bool,
}

impl Quirks {
    /// NMOS hardware behavior.
    pub const HARDWARE: Quirks = Quirks {
        sta_clears_flags: false,
        arithmetic_ignores_carry: false,
        indirect_y_indexes_pointer: false,
    };

    /// Bug-compatible with the simplified core.
    pub const REFERENCE: Quirks = Quirks {
        sta_clears_flags: true,
        arithmetic_ignores_carry: true,
        indirect_y_indexes_pointer: true,
    };
}

impl Default for Quirks {
    fn default() -> Self {
        Quirks::HARDWARE
    }
}
