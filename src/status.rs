//! # Processor Status Flags
//!
//! The status register is kept as eight independent booleans. Only Carry,
//! Zero, Overflow, Negative and Break are computed by the instructions the
//! core implements; Interrupt, Decimal and Unused are carried for
//! completeness and stay false unless a host sets them.

/// 6502 processor status flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    /// Carry flag (C)
    pub carry: bool,

    /// Zero flag (Z)
    pub zero: bool,

    /// Interrupt disable flag (I)
    pub interrupt: bool,

    /// Decimal mode flag (D)
    pub decimal: bool,

    /// Break flag (B), set by BRK and used as the halt signal
    pub brk: bool,

    /// Unused bit 5
    pub unused: bool,

    /// Overflow flag (V)
    pub overflow: bool,

    /// Negative flag (N)
    pub negative: bool,
}

impl StatusFlags {
    /// Packs the flags into a byte (bit layout NV-BDIZC).
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::StatusFlags;
    ///
    /// let flags = StatusFlags { carry: true, negative: true, ..StatusFlags::default() };
    /// assert_eq!(flags.bits(), 0b1000_0001);
    /// ```
    pub fn bits(&self) -> u8 {
        [
            self.carry,
            self.zero,
            self.interrupt,
            self.decimal,
            self.brk,
            self.unused,
            self.overflow,
            self.negative,
        ]
        .iter()
        .enumerate()
        .fold(0, |acc, (bit, &set)| acc | ((set as u8) << bit))
    }

    /// Updates Zero and Negative from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}
