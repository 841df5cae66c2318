//! Branches

use crate::{cpu::Status, Memory, CPU};

impl<M: Memory> CPU<M> {
    pub(in crate::cpu) fn bcc(&mut self) {
        self.branch_if(!self.status.contains(Status::CARRY))
    }

    pub(in crate::cpu) fn bcs(&mut self) {
        self.branch_if(self.status.contains(Status::CARRY))
    }

    pub(in crate::cpu) fn beq(&mut self) {
        self.branch_if(self.status.contains(Status::ZERO))
    }

    pub(in crate::cpu) fn bmi(&mut self) {
        self.branch_if(self.status.contains(Status::NEGATIVE))
    }

    pub(in crate::cpu) fn bne(&mut self) {
        self.branch_if(!self.status.contains(Status::ZERO))
    }

    pub(in crate::cpu) fn bpl(&mut self) {
        self.branch_if(!self.status.contains(Status::NEGATIVE))
    }

    pub(in crate::cpu) fn bvc(&mut self) {
        self.branch_if(!self.status.contains(Status::OVERFLOW))
    }

    pub(in crate::cpu) fn bvs(&mut self) {
        self.branch_if(self.status.contains(Status::OVERFLOW))
    }

    fn branch_if(&mut self, cond: bool) {
        let offset = self.fetch_at_program_counter() as i8;
        if cond {
            let previous = self.program_counter;
            self.program_counter += offset as u16;
            self.cycle_count += 1;
            if self.program_counter.page_crossed(previous) {
                self.cycle_count += 1;
            }
        }
    }
}
