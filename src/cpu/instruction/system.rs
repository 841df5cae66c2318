//! System Functions

use crate::{cpu::Status, Address, Memory, CPU};

const INTERRUPT_VECTOR: Address = Address::new(0xFFFE);

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn brk(&mut self) {
        // BRK's second byte is a signature byte, conventionally read by debuggers to identify the
        // break reason; the CPU itself just skips over it before pushing the return address.
        self.fetch_at_program_counter();
        self.interrupt(INTERRUPT_VECTOR, true)
    }

    pub(in crate::cpu) fn nop(&mut self) {
        self.ignore_argument();
    }

    pub(in crate::cpu) fn rti(&mut self) {
        self.ignore_argument();
        self.increment_stack();
        let pulled = Status::from_bits_truncate(self.pull_and_increment_stack());
        self.status = pulled & !(Status::BREAK | Status::UNUSED);
        let lower = self.pull_and_increment_stack();
        let higher = self.pull_stack();
        self.program_counter = Address::from_bytes(higher, lower);
    }
}
