//! Stack Operations
use crate::Memory;

use crate::cpu::{Status, CPU};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn pla(&mut self) {
        self.ignore_argument();
        self.increment_stack();
        let accumulator = self.pull_stack();
        self.set_accumulator(accumulator);
    }

    pub(in crate::cpu) fn plp(&mut self) {
        self.ignore_argument();
        self.increment_stack();
        let pulled = Status::from_bits_truncate(self.pull_stack());
        self.status = pulled & !(Status::BREAK | Status::UNUSED);
    }

    pub(in crate::cpu) fn pha(&mut self) {
        self.ignore_argument();
        self.push_stack(self.accumulator)
    }

    pub(in crate::cpu) fn php(&mut self) {
        self.ignore_argument();
        self.push_status(true)
    }
}
