//! Logical operations

use crate::{
    cpu::{
        addressing_modes::{BITAddressingMode, FlexibleAddressingMode},
        Status,
    },
    Memory, CPU,
};

impl<M: Memory> CPU<M> {
    pub fn and(&mut self, addressing_mode: FlexibleAddressingMode) {
        let value = self.fetch(addressing_mode);
        self.set_accumulator(self.accumulator & value);
    }

    pub fn eor(&mut self, addressing_mode: FlexibleAddressingMode) {
        let value = self.fetch(addressing_mode);
        self.set_accumulator(self.accumulator ^ value);
    }

    pub fn ora(&mut self, addressing_mode: FlexibleAddressingMode) {
        let value = self.fetch(addressing_mode);
        self.set_accumulator(self.accumulator | value);
    }

    pub fn bit(&mut self, addressing_mode: BITAddressingMode) {
        let value = self.fetch(addressing_mode);
        let result = self.accumulator & value;
        self.status.set(Status::ZERO, result == 0);
        self.status.set(Status::OVERFLOW, value & (1 << 6) != 0);
        self.status
            .set(Status::NEGATIVE, (value as i8).is_negative());
    }
}
