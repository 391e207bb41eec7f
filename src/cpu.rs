//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! its lifecycle state machine and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: see [`StatusFlags`]
//! - **Lifecycle**: [`CpuState`] (Reset, Running, Halted)
//!
//! ## Execution Model
//!
//! - `load_at()`: copy a program into memory and point the reset vector at it
//! - `reset()`: the only transition into `Running`
//! - `step()`: execute exactly one instruction
//! - `run()` / `execute()`: step until BRK halts the CPU

use std::fmt;

use log::{debug, error, info, trace};

use crate::instructions;
use crate::{decode, ExecutionError, MemoryBus, Quirks, StatusFlags, RESET_VECTOR};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Load address used by [`CPU::load`] and [`CPU::execute`].
pub const DEFAULT_PROGRAM_ADDRESS: u16 = 0x0600;

/// Lifecycle of a CPU session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /// Created or loaded, waiting for `reset()`.
    Reset,

    /// Executing instructions.
    Running,

    /// BRK was executed; further steps do nothing.
    Halted,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus for the whole session. It is generic over the
/// bus implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use emu6502::{CpuState, RamBus, CPU};
///
/// let mut cpu = CPU::new(RamBus::new());
/// cpu.load_at(&[0xA9, 0x42, 0x00], 0x0600).unwrap(); // LDA #$42, BRK
/// cpu.reset().unwrap();
///
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.sp(), 0xFF);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 0x42);
///
/// cpu.step().unwrap();
/// assert_eq!(cpu.state(), CpuState::Halted);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flags: StatusFlags,

    pub(crate) state: CpuState,

    pub(crate) quirks: Quirks,

    /// Instructions executed since construction
    pub(crate) steps: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with hardware behavior and all registers cleared.
    ///
    /// The CPU starts in [`CpuState::Reset`]; call [`load_at`](Self::load_at)
    /// and [`reset`](Self::reset) before stepping.
    pub fn new(memory: M) -> Self {
        Self::with_quirks(memory, Quirks::default())
    }

    /// Creates a CPU with the given behavior quirks.
    pub fn with_quirks(memory: M, quirks: Quirks) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flags: StatusFlags::default(),
            state: CpuState::Reset,
            quirks,
            steps: 0,
            memory,
        }
    }

    /// Loads `program` at [`DEFAULT_PROGRAM_ADDRESS`].
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.load_at(program, DEFAULT_PROGRAM_ADDRESS)
    }

    /// Copies `program` into memory at `base` and stores `base` in the reset vector.
    ///
    /// If any byte of the image would fall outside the bus, nothing is written
    /// and the reset vector keeps its previous value.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{MemoryBus, RamBus, CPU, RESET_VECTOR};
    ///
    /// let mut cpu = CPU::new(RamBus::new());
    /// cpu.load_at(&[0x01, 0x02, 0x03], 0x0200).unwrap();
    ///
    /// assert_eq!(cpu.memory().read_word(RESET_VECTOR).unwrap(), 0x0200);
    /// assert_eq!(cpu.memory().read(0x0202).unwrap(), 0x03);
    /// ```
    pub fn load_at(&mut self, program: &[u8], base: u16) -> Result<(), ExecutionError> {
        if base as usize + program.len() > 0x10000 {
            return Err(ExecutionError::OutOfRangeAddress(0xFFFF));
        }

        // Every target must be backed before the first byte lands.
        for offset in 0..program.len() {
            self.memory.read(base + offset as u16)?;
        }

        for (offset, &byte) in program.iter().enumerate() {
            self.memory.write(base + offset as u16, byte)?;
        }
        self.memory.write_word(RESET_VECTOR, base)?;

        debug!("loaded {} bytes at 0x{:04X}", program.len(), base);
        Ok(())
    }

    /// Resets the CPU and moves it into [`CpuState::Running`].
    ///
    /// Clears every flag, zeroes A and X, sets SP to 0xFF and loads PC from
    /// the reset vector. Y is left untouched.
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        self.pc = self.memory.read_word(RESET_VECTOR)?;
        self.flags = StatusFlags::default();
        self.a = 0x00;
        self.x = 0x00;
        self.sp = 0xFF;
        self.state = CpuState::Running;

        debug!("reset, starting at 0x{:04X}", self.pc);
        Ok(())
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in the decode table
    /// 3. Resolve the operand for the instruction's addressing mode
    /// 4. Execute the instruction
    /// 5. Advance PC by the instruction size unless the instruction jumped
    ///
    /// Stepping a halted CPU does nothing. Stepping before `reset()` fails with
    /// `NotRunning`.
    ///
    /// # Errors
    ///
    /// Any [`ExecutionError`] is fatal; the host should stop stepping.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        match self.state {
            CpuState::Reset => return Err(ExecutionError::NotRunning),
            CpuState::Halted => return Ok(()),
            CpuState::Running => {}
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc).inspect_err(|e| {
            error!("opcode fetch at 0x{:04X} failed: {}", pc, e);
        })?;
        let metadata = decode(opcode).inspect_err(|e| {
            error!("{} at 0x{:04X}", e, pc);
        })?;

        trace!(
            "{:04X}  {:02X}  {} {:<11?} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            self.a,
            self.x,
            self.y,
            self.flags.bits(),
            self.sp
        );

        let operand = self.resolve_operand(metadata.addressing_mode)?;
        let flow = instructions::execute(self, metadata, operand).inspect_err(|e| {
            error!("{} failed at 0x{:04X}: {}", metadata.mnemonic, pc, e);
        })?;

        if !flow.did_jump {
            self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
        }
        self.steps += 1;

        if self.flags.brk {
            self.state = CpuState::Halted;
            info!("halted by BRK at 0x{:04X} after {} steps", pc, self.steps);
        }

        Ok(())
    }

    /// Steps until the CPU halts and returns the number of instructions executed.
    pub fn run(&mut self) -> Result<u64, ExecutionError> {
        let start = self.steps;
        while self.state != CpuState::Halted {
            self.step()?;
        }
        Ok(self.steps - start)
    }

    /// Executes at most `budget` instructions, stopping early if the CPU halts.
    ///
    /// Returns the number of instructions actually executed. Hosts that pace
    /// execution against a frame clock call this once per frame.
    pub fn run_steps(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let start = self.steps;
        while self.steps - start < budget && self.state != CpuState::Halted {
            self.step()?;
        }
        Ok(self.steps - start)
    }

    /// Loads `program` at [`DEFAULT_PROGRAM_ADDRESS`], resets and runs until BRK.
    pub fn execute(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.execute_at(program, DEFAULT_PROGRAM_ADDRESS)
    }

    /// Loads `program` at `base`, resets and runs until BRK.
    pub fn execute_at(&mut self, program: &[u8], base: u16) -> Result<(), ExecutionError> {
        self.load_at(program, base)?;
        self.reset()?;
        self.run()?;
        Ok(())
    }

    // ========== Stack ==========

    /// Pushes a byte at 0x0100 | SP, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.memory.write(STACK_BASE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increments SP (wrapping), then pops the byte at 0x0100 | SP.
    pub(crate) fn pop(&mut self) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 | SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns a copy of the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Returns the status flags packed as NV-BDIZC.
    pub fn status(&self) -> u8 {
        self.flags.bits()
    }

    /// Returns the lifecycle state: reset, running or halted.
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Returns true once BRK has halted the CPU.
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Returns the behavior quirks this CPU was built with.
    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    /// Returns the number of instructions executed since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Setters ==========

    /// Sets the accumulator. Flags are not touched.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter. The next step fetches from `value`.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer (low byte of the page-one stack address).
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Mutably borrows the status flags.
    pub fn flags_mut(&mut self) -> &mut StatusFlags {
        &mut self.flags
    }
}

impl<M: MemoryBus> fmt::Display for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:08b}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.flags.bits()
        )
    }
}

impl<M: MemoryBus> fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CPU")
            .field("a", &self.a)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("pc", &self.pc)
            .field("sp", &self.sp)
            .field("flags", &self.flags)
            .field("state", &self.state)
            .field("quirks", &self.quirks)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RamBus;

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new(RamBus::new());

        assert_eq!(cpu.state(), CpuState::Reset);
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.flags(), StatusFlags::default());
        assert_eq!(cpu.quirks(), Quirks::HARDWARE);
        assert_eq!(cpu.steps(), 0);
    }

    #[test]
    fn test_step_before_reset_is_rejected() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.load(&[0xEA]).unwrap();

        assert_eq!(cpu.step(), Err(ExecutionError::NotRunning));
        assert_eq!(cpu.steps(), 0);
    }

    #[test]
    fn test_reset_state() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.load_at(&[0xEA], 0x0300).unwrap();
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_sp(0x10);
        cpu.flags_mut().carry = true;
        cpu.flags_mut().brk = true;

        cpu.reset().unwrap();

        assert_eq!(cpu.state(), CpuState::Running);
        assert_eq!(cpu.pc(), 0x0300);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x33);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.flags(), StatusFlags::default());
    }

    #[test]
    fn test_load_writes_reset_vector() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.load_at(&[0x01, 0x02, 0x03], 0x0200).unwrap();

        assert_eq!(cpu.memory().read_word(RESET_VECTOR).unwrap(), 0x0200);
        assert_eq!(cpu.memory().window(0x0200, 3).unwrap(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_load_default_address() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.load(&[0xEA]).unwrap();

        assert_eq!(
            cpu.memory().read_word(RESET_VECTOR).unwrap(),
            DEFAULT_PROGRAM_ADDRESS
        );
    }

    #[test]
    fn test_load_past_end_of_ram() {
        let mut cpu = CPU::new(RamBus::new());

        assert_eq!(
            cpu.load_at(&[0xEA, 0xEA, 0xEA], 0x07FE),
            Err(ExecutionError::OutOfRangeAddress(0x0800))
        );
        assert_eq!(
            cpu.load_at(&[0xEA, 0xEA], 0xFFFF),
            Err(ExecutionError::OutOfRangeAddress(0xFFFF))
        );
    }

    #[test]
    fn test_halted_step_is_noop() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.execute(&[0x00]).unwrap();

        let pc = cpu.pc();
        cpu.step().unwrap();

        assert!(cpu.is_halted());
        assert_eq!(cpu.pc(), pc);
        assert_eq!(cpu.steps(), 1);
    }

    #[test]
    fn test_run_steps_budget() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.load(&[0xEA, 0xEA, 0xEA, 0xEA, 0x00]).unwrap();
        cpu.reset().unwrap();

        assert_eq!(cpu.run_steps(3).unwrap(), 3);
        assert_eq!(cpu.pc(), DEFAULT_PROGRAM_ADDRESS + 3);
        assert_eq!(cpu.state(), CpuState::Running);

        // Only NOP and BRK remain
        assert_eq!(cpu.run_steps(10).unwrap(), 2);
        assert!(cpu.is_halted());
    }

    #[test]
    fn test_unsupported_opcode_is_fatal() {
        let mut cpu = CPU::new(RamBus::new());

        assert_eq!(
            cpu.execute(&[0xEA, 0x02]),
            Err(ExecutionError::UnsupportedOpcode(0x02))
        );
        assert_eq!(cpu.pc(), DEFAULT_PROGRAM_ADDRESS + 1);
        assert_eq!(cpu.state(), CpuState::Running);
    }

    #[test]
    fn test_stack_push_pop_wraps() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.set_sp(0x00);

        cpu.push(0xAB).unwrap();
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100).unwrap(), 0xAB);

        assert_eq!(cpu.pop().unwrap(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_display_dump() {
        let mut cpu = CPU::new(RamBus::new());
        cpu.set_pc(0x0600);
        cpu.set_a(0xC0);
        cpu.set_x(0xC1);
        cpu.set_sp(0xFF);
        cpu.flags_mut().negative = true;

        assert_eq!(
            cpu.to_string(),
            "PC:0600 A:C0 X:C1 Y:00 SP:FF P:10000000"
        );
    }
}
