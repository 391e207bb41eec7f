//! WebAssembly bindings for the emu6502 core.
//!
//! Exposes the two host seams (program loading and byte-range reads) plus
//! step control to JavaScript.

pub mod api;

pub use api::Emulator;
