//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading a program, driving the
//! CPU, and sampling memory windows for display.

use crate::{ExecutionError, MemoryBus, RamBus, CPU, DEFAULT_PROGRAM_ADDRESS};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<RamBus>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator over a fresh 2 KiB RAM bus
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(RamBus::new()),
        }
    }

    /// Copy a program into RAM and point the reset vector at it.
    ///
    /// `start_addr` defaults to 0x0600 when omitted.
    pub fn load_program(&mut self, program: &[u8], start_addr: Option<u16>) -> Result<(), JsError> {
        let base = start_addr.unwrap_or(DEFAULT_PROGRAM_ADDRESS);
        self.cpu.load_at(program, base)?;
        Ok(())
    }

    /// Reset the CPU from the reset vector
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.cpu.reset()?;
        Ok(())
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Execute up to `budget` instructions and return how many ran
    pub fn run_steps(&mut self, budget: u32) -> Result<u32, JsError> {
        let executed = self.cpu.run_steps(budget as u64)?;
        Ok(executed as u32)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed NV-BDIZC status byte
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.cpu.steps() as f64 // u64 does not cross as a JS number
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flags().negative
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flags().overflow
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flags().zero
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flags().carry
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flags().brk
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        Ok(self.cpu.memory().read(addr)?)
    }

    /// Read a contiguous window (e.g. the 32x32 display at 0x0200)
    pub fn read_window(&self, start: u16, len: usize) -> Result<js_sys::Uint8Array, JsError> {
        let bytes = self.cpu.memory().window(start, len)?;
        Ok(js_sys::Uint8Array::from(bytes))
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
