//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `RamBus`, the small RAM-backed bus the
//! core ships with.
//!
//! ## Design Principles
//!
//! - Accesses outside the modeled space are faults, never defaulted reads
//! - 16-bit values are little-endian (low byte at `addr`, high byte at `addr + 1`)
//! - Word access does not wrap at the modeled memory boundary

use crate::ExecutionError;

/// Size of the RAM modeled by [`RamBus`] (0x0000-0x07FF).
pub const RAM_SIZE: usize = 0x0800;

/// Address of the reset vector read by [`CPU::reset`](crate::CPU::reset).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations only need the byte accessors; word and range access are
/// provided on top of them. A bus that maps real ROM over the vector area can
/// rely on the provided word methods as-is.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, RamBus};
///
/// let mut bus = RamBus::new();
/// bus.write_word(0x0100, 0x1122).unwrap();
///
/// assert_eq!(bus.read(0x0100).unwrap(), 0x22);
/// assert_eq!(bus.read(0x0101).unwrap(), 0x11);
/// assert_eq!(bus.read_word(0x0100).unwrap(), 0x1122);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Returns `OutOfRangeAddress` if the address is not backed by the bus.
    fn read(&self, addr: u16) -> Result<u8, ExecutionError>;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Returns `OutOfRangeAddress` if the address is not backed by the bus.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError>;

    /// Reads a little-endian word from `addr` and `addr + 1`.
    fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(next_address(addr)?)? as u16;
        Ok((hi << 8) | lo)
    }

    /// Writes a little-endian word to `addr` and `addr + 1`.
    ///
    /// The high address is checked before anything is written, so a word at
    /// the top of the address space fails without touching `addr`.
    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), ExecutionError> {
        let hi_addr = next_address(addr)?;
        self.write(addr, (value & 0xFF) as u8)?;
        self.write(hi_addr, (value >> 8) as u8)
    }

    /// Copies `len` consecutive bytes starting at `start`.
    ///
    /// This is the seam display collaborators use to sample video memory once
    /// per frame.
    fn read_range(&self, start: u16, len: usize) -> Result<Vec<u8>, ExecutionError> {
        (0..len)
            .map(|offset| {
                let addr = u16::try_from(start as usize + offset)
                    .map_err(|_| ExecutionError::OutOfRangeAddress(0xFFFF))?;
                self.read(addr)
            })
            .collect()
    }
}

/// The high byte of a word lives at `addr + 1`; there is no wrap to 0x0000.
fn next_address(addr: u16) -> Result<u16, ExecutionError> {
    addr.checked_add(1)
        .ok_or(ExecutionError::OutOfRangeAddress(addr))
}

/// 2KB RAM bus with a reset-vector hook.
///
/// All bytes in 0x0000-0x07FF are plain RAM initialized to zero. Anything
/// above is out of range, with one exception: word accesses at
/// [`RESET_VECTOR`] are routed to an internal scalar. That hook stands in
/// for cartridge ROM until mapped memory exists; byte accesses at 0xFFFC
/// are still out of range.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, RamBus, ExecutionError, RESET_VECTOR};
///
/// let mut bus = RamBus::new();
/// bus.write_word(RESET_VECTOR, 0x0600).unwrap();
/// assert_eq!(bus.read_word(RESET_VECTOR).unwrap(), 0x0600);
///
/// assert_eq!(bus.read(0x0800), Err(ExecutionError::OutOfRangeAddress(0x0800)));
/// ```
#[derive(Debug, Clone)]
pub struct RamBus {
    ram: Box<[u8; RAM_SIZE]>,

    /// Backing store for the reset-vector hook.
    reset_vector: u16,
}

impl RamBus {
    /// Creates a bus with all RAM zeroed and a zero reset vector.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; RAM_SIZE]),
            reset_vector: 0,
        }
    }

    /// Borrows `len` bytes of RAM starting at `start`.
    ///
    /// Fails with the first address past the end of RAM if the window does not fit.
    pub fn window(&self, start: u16, len: usize) -> Result<&[u8], ExecutionError> {
        let begin = start as usize;
        match begin.checked_add(len).filter(|&end| end <= RAM_SIZE) {
            Some(end) => Ok(&self.ram[begin..end]),
            None => {
                let first_bad = begin.max(RAM_SIZE).min(u16::MAX as usize) as u16;
                Err(ExecutionError::OutOfRangeAddress(first_bad))
            }
        }
    }

    fn index(addr: u16) -> Result<usize, ExecutionError> {
        let index = addr as usize;
        if index < RAM_SIZE {
            Ok(index)
        } else {
            Err(ExecutionError::OutOfRangeAddress(addr))
        }
    }
}

impl Default for RamBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for RamBus {
    fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
        Ok(self.ram[Self::index(addr)?])
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        self.ram[Self::index(addr)?] = value;
        Ok(())
    }

    fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        // TODO: drop the vector hook once ROM images can be mapped at 0xFFFC.
        if addr == RESET_VECTOR {
            return Ok(self.reset_vector);
        }
        let lo = self.read(addr)? as u16;
        let hi = self.read(next_address(addr)?)? as u16;
        Ok((hi << 8) | lo)
    }

    fn write_word(&mut self, addr: u16, value: u16) -> Result<(), ExecutionError> {
        if addr == RESET_VECTOR {
            self.reset_vector = value;
            return Ok(());
        }
        // Both bytes must land in RAM or neither is written.
        let lo = Self::index(addr)?;
        let hi = Self::index(next_address(addr)?)?;
        self.ram[lo] = (value & 0xFF) as u8;
        self.ram[hi] = (value >> 8) as u8;
        Ok(())
    }
}
