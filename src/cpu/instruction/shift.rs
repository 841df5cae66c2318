//! Shifts

use crate::{
    cpu::{ReferenceAddressingMode, Status},
    Memory, CPU,
};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn asl(&mut self, addressing_mode: impl ReferenceAddressingMode) -> u8 {
        self.shift(addressing_mode, 7, |val, _| val << 1)
    }

    pub(in crate::cpu) fn lsr(&mut self, addressing_mode: impl ReferenceAddressingMode) -> u8 {
        self.shift(addressing_mode, 0, |val, _| val >> 1)
    }

    pub(in crate::cpu) fn rol(&mut self, addressing_mode: impl ReferenceAddressingMode) -> u8 {
        self.shift(addressing_mode, 7, |val, carry| val << 1 | carry)
    }

    pub(in crate::cpu) fn ror(&mut self, addressing_mode: impl ReferenceAddressingMode) -> u8 {
        self.shift(addressing_mode, 0, |val, carry| val >> 1 | carry << 7)
    }

    fn shift(
        &mut self,
        addressing_mode: impl ReferenceAddressingMode,
        carry_bit: u8,
        op: impl FnOnce(u8, u8) -> u8,
    ) -> u8 {
        let reference = self.fetch_ref(addressing_mode);
        let carry = self.status.contains(Status::CARRY);

        let old_value = self.read_reference(reference);
        self.set_reference(reference, old_value); // Redundant write
        let new_value = op(old_value, carry as u8);
        let carry = old_value & (1 << carry_bit) != 0;

        self.set_reference(reference, new_value);
        self.status.set(Status::CARRY, carry);
        new_value
    }
}
