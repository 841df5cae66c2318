//! Jumps & Calls

use crate::{cpu::addressing_modes::JumpAddressingMode, Address, Memory, CPU};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn jmp(&mut self, addressing_mode: JumpAddressingMode) {
        self.program_counter = addressing_mode.fetch_address(self);
    }

    pub(in crate::cpu) fn jsr(&mut self) {
        let addr = self.fetch_address_at_program_counter();

        self.cycle_count += 1; // Mysterious internal operation happens here

        // For some reason the spec says the pointer must be to the last byte of the JSR
        // instruction...
        let data = self.program_counter - 1;

        self.push_stack(data.higher());
        self.push_stack(data.lower());

        self.program_counter = addr;
    }

    pub(in crate::cpu) fn rts(&mut self) {
        self.ignore_argument();
        self.increment_stack();
        let lower = self.pull_and_increment_stack();
        let higher = self.pull_stack();
        self.program_counter = Address::from_bytes(higher, lower);
        self.fetch_at_program_counter();
    }
}
