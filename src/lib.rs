//! A cycle-counting interpreter for the MOS 6502 8-bit microprocessor.
//!
//! [`CPU`] executes against anything implementing [`Memory`]; the crate doesn't assume a
//! particular machine, only the 6502's own mandatory memory layout (stack page, reset/IRQ/NMI
//! vectors). [`CPU::step`] decodes and runs one instruction and reports how many clock cycles it
//! took, so a host can drive the CPU at whatever real or simulated clock rate it needs, using
//! [`run_at`] if it wants a ready-made fixed-rate loop.
#![allow(clippy::upper_case_acronyms)] // Allow upper case acronyms like CPU because I think it's more readable!

pub use crate::address::Address;
pub use crate::cpu::instructions;
pub use crate::cpu::Instruction;
pub use crate::cpu::Status;
pub use crate::cpu::StackPointer;
pub use crate::cpu::CPU;
pub use crate::driver::run_at;
pub use crate::error::CpuError;
pub use crate::error::LoadError;
pub use crate::loader::load_rom;
pub use crate::loader::load_rom_into;
pub use crate::memory::ArrayMemory;
pub use crate::memory::Memory;

mod address;
mod bcd;
mod cpu;
mod driver;
mod error;
mod loader;
mod memory;

/// Builds an in-memory image for tests, writing literal byte values (or expressions that
/// evaluate to `u8`, such as the opcode constants in [`instructions`]) at the given offsets.
///
/// ```
/// # use mos6502::{instructions::*, mem};
/// let memory = mem! {
///     0 => { LDA_IMM, 5u8 }
///     0x80 => { 1u8 }
/// };
/// ```
#[macro_export]
macro_rules! mem {
    ($( $data: expr ),* $(,)? ) => {
        mem!{0 => { $($data),* }}
    };
    ($( $offset: expr => { $( $data: expr ),* $(,)? } )*) => {
        {
            #[allow(unused_variables, unused_mut)]
            let mut memory = $crate::ArrayMemory::default();
            $(
                #[allow(unused_variables, unused_mut)]
                let mut addr: $crate::Address = $crate::Address::from($offset);
                $(
                    let byte: u8 = $data;
                    $crate::Memory::write(&mut memory, addr, byte);
                    addr += 1u16;
                )*
            )*
            memory
        }
    };
    ($offset: expr => $data: expr) => {
        mem!{$offset => { $data }}
    };
}
