//! Loading raw 6502 program images into memory.
//!
//! A ROM here is an unheadered byte dump of a program, destined for a fixed offset in the
//! 64KiB address space. There is no container format to parse (that's a concern for a higher
//! layer, e.g. an iNES loader); this just validates that the image fits and copies it in.

use crate::address::Address;
use crate::error::LoadError;
use crate::memory::ArrayMemory;

/// Copies `rom` into a fresh [`ArrayMemory`] starting at `address`.
///
/// Fails if the image would run past the end of the 64KiB address space.
pub fn load_rom(rom: &[u8], address: Address) -> Result<ArrayMemory, LoadError> {
    let mut memory = ArrayMemory::default();
    load_rom_into(&mut memory, rom, address)?;
    Ok(memory)
}

/// Copies `rom` into an existing [`ArrayMemory`] starting at `address`, leaving the rest of
/// memory untouched.
pub fn load_rom_into(
    memory: &mut ArrayMemory,
    rom: &[u8],
    address: Address,
) -> Result<(), LoadError> {
    let start = address.index();
    let end = start
        .checked_add(rom.len())
        .filter(|&end| end <= 0x10000)
        .ok_or(LoadError::TooLarge {
            size: rom.len(),
            address,
            available: 0x10000 - start.min(0x10000),
        })?;

    memory.slice_mut()[start..end].copy_from_slice(rom);
    Ok(())
}
