//! Status Flag Changes

use crate::{cpu::Status, Memory, CPU};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn clc(&mut self) {
        self.ignore_argument();
        self.status.remove(Status::CARRY);
    }

    pub(in crate::cpu) fn cld(&mut self) {
        self.ignore_argument();
        self.status.remove(Status::DECIMAL);
    }

    pub(in crate::cpu) fn cli(&mut self) {
        self.ignore_argument();
        self.status.remove(Status::INTERRUPT_DISABLE);
    }

    pub(in crate::cpu) fn clv(&mut self) {
        self.ignore_argument();
        self.status.remove(Status::OVERFLOW);
    }

    pub(in crate::cpu) fn sec(&mut self) {
        self.ignore_argument();
        self.status.insert(Status::CARRY);
    }

    pub(in crate::cpu) fn sed(&mut self) {
        self.ignore_argument();
        self.status.insert(Status::DECIMAL);
    }

    pub(in crate::cpu) fn sei(&mut self) {
        self.ignore_argument();
        self.status.insert(Status::INTERRUPT_DISABLE);
    }
}
