//! Register Transfers

use crate::{Memory, CPU};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn tax(&mut self) {
        self.ignore_argument();
        self.set_x(self.accumulator);
    }

    pub(in crate::cpu) fn tay(&mut self) {
        self.ignore_argument();
        self.set_y(self.accumulator);
    }

    pub(in crate::cpu) fn txa(&mut self) {
        self.ignore_argument();
        self.set_accumulator(self.x);
    }

    pub(in crate::cpu) fn tya(&mut self) {
        self.ignore_argument();
        self.set_accumulator(self.y);
    }

    pub(in crate::cpu) fn tsx(&mut self) {
        self.ignore_argument();
        self.set_x(self.stack_pointer.0);
    }

    pub(in crate::cpu) fn txs(&mut self) {
        self.ignore_argument();
        self.stack_pointer.0 = self.x;
    }
}
