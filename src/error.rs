use thiserror::Error;

use crate::Address;

/// A fatal fault raised by the CPU while executing a program.
///
/// Every variant is unrecoverable: the interpreter does not attempt to silently paper over
/// illegal state. The caller decides what to do next, but the [`crate::CPU`] that raised the
/// error should not be stepped again without first inspecting or resetting it.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CpuError {
    /// The byte fetched at `address` does not correspond to any of the 151 documented (official)
    /// 6502 opcodes. Undocumented/illegal opcodes are treated as fatal rather than emulated.
    #[error("illegal instruction {opcode:#04x} at {address}")]
    IllegalInstruction { opcode: u8, address: Address },
}

/// An error encountered while loading a binary image into memory.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LoadError {
    #[error("program of {size} bytes does not fit at load address {address} (space for {available} bytes)")]
    TooLarge {
        size: usize,
        address: Address,
        available: usize,
    },
}
