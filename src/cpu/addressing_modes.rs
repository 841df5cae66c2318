//! Addressing modes resolve an instruction's operand bytes into a [`Reference`]: a place to read
//! from or write to. Each family below supports a different subset of the 6502's 13 addressing
//! modes, matching exactly which modes the real instruction set offers for that group of
//! opcodes.

use crate::address::Address;
use crate::Memory;

use super::Reference;
use super::ReferenceAddressingMode;
use super::CPU;

macro_rules! def_addressing_modes {
    ($($name:ident { $($mode:ident),* $(,)* })*) => {
        $(
        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub enum $name {
            $(
            $mode,
            )*
        }
        )*
    };
}

def_addressing_modes! {
    FlexibleAddressingMode {
        Immediate,
        ZeroPage,
        ZeroPageX,
        Absolute,
        AbsoluteX,
        AbsoluteY,
        IndexedIndirect,
        IndirectIndexed,
    }

    StoreAddressingMode {
        ZeroPage,
        ZeroPageX,
        Absolute,
        AbsoluteX,
        AbsoluteY,
        IndexedIndirect,
        IndirectIndexed,
    }

    ShiftAddressingMode {
        Accumulator,
        ZeroPage,
        ZeroPageX,
        Absolute,
        AbsoluteX,
    }

    BITAddressingMode {
        ZeroPage,
        Absolute,
    }

    CompareAddressingMode {
        Immediate,
        ZeroPage,
        Absolute,
    }

    IncDecAddressingMode {
        ZeroPage,
        ZeroPageX,
        Absolute,
        AbsoluteX,
    }

    JumpAddressingMode {
        Absolute,
        Indirect,
    }

    LDXAddressingMode {
        Immediate,
        ZeroPage,
        ZeroPageY,
        Absolute,
        AbsoluteY,
    }

    LDYAddressingMode {
        Immediate,
        ZeroPage,
        ZeroPageX,
        Absolute,
        AbsoluteX,
    }

    STXAddressingMode {
        ZeroPage,
        ZeroPageY,
        Absolute,
    }

    STYAddressingMode {
        ZeroPage,
        ZeroPageX,
        Absolute,
    }
}

impl ReferenceAddressingMode for FlexibleAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            FlexibleAddressingMode::Immediate => cpu.resolve_immediate(),
            FlexibleAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            FlexibleAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            FlexibleAddressingMode::Absolute => cpu.resolve_absolute(),
            FlexibleAddressingMode::AbsoluteX => cpu.resolve_absolute_indexed(cpu.x, false),
            FlexibleAddressingMode::AbsoluteY => cpu.resolve_absolute_indexed(cpu.y, false),
            FlexibleAddressingMode::IndexedIndirect => cpu.resolve_indexed_indirect(),
            FlexibleAddressingMode::IndirectIndexed => cpu.resolve_indirect_indexed(false),
        }
    }
}

impl ReferenceAddressingMode for StoreAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            StoreAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            StoreAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            StoreAddressingMode::Absolute => cpu.resolve_absolute(),
            StoreAddressingMode::AbsoluteX => cpu.resolve_absolute_indexed(cpu.x, true),
            StoreAddressingMode::AbsoluteY => cpu.resolve_absolute_indexed(cpu.y, true),
            StoreAddressingMode::IndexedIndirect => cpu.resolve_indexed_indirect(),
            StoreAddressingMode::IndirectIndexed => cpu.resolve_indirect_indexed(true),
        }
    }
}

impl ReferenceAddressingMode for ShiftAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            ShiftAddressingMode::Accumulator => {
                cpu.ignore_argument();
                Reference::Accumulator
            }
            ShiftAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            ShiftAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            ShiftAddressingMode::Absolute => cpu.resolve_absolute(),
            ShiftAddressingMode::AbsoluteX => cpu.resolve_absolute_indexed(cpu.x, true),
        }
    }
}

impl ReferenceAddressingMode for BITAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            BITAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            BITAddressingMode::Absolute => cpu.resolve_absolute(),
        }
    }
}

impl ReferenceAddressingMode for CompareAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            CompareAddressingMode::Immediate => cpu.resolve_immediate(),
            CompareAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            CompareAddressingMode::Absolute => cpu.resolve_absolute(),
        }
    }
}

impl ReferenceAddressingMode for IncDecAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            IncDecAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            IncDecAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            IncDecAddressingMode::Absolute => cpu.resolve_absolute(),
            IncDecAddressingMode::AbsoluteX => cpu.resolve_absolute_indexed(cpu.x, true),
        }
    }
}

impl ReferenceAddressingMode for LDXAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            LDXAddressingMode::Immediate => cpu.resolve_immediate(),
            LDXAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            LDXAddressingMode::ZeroPageY => cpu.resolve_zero_page_indexed(cpu.y),
            LDXAddressingMode::Absolute => cpu.resolve_absolute(),
            LDXAddressingMode::AbsoluteY => cpu.resolve_absolute_indexed(cpu.y, false),
        }
    }
}

impl ReferenceAddressingMode for LDYAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            LDYAddressingMode::Immediate => cpu.resolve_immediate(),
            LDYAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            LDYAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            LDYAddressingMode::Absolute => cpu.resolve_absolute(),
            LDYAddressingMode::AbsoluteX => cpu.resolve_absolute_indexed(cpu.x, false),
        }
    }
}

impl ReferenceAddressingMode for STXAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            STXAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            STXAddressingMode::ZeroPageY => cpu.resolve_zero_page_indexed(cpu.y),
            STXAddressingMode::Absolute => cpu.resolve_absolute(),
        }
    }
}

impl ReferenceAddressingMode for STYAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference {
        match self {
            STYAddressingMode::ZeroPage => cpu.resolve_zero_page(),
            STYAddressingMode::ZeroPageX => cpu.resolve_zero_page_indexed(cpu.x),
            STYAddressingMode::Absolute => cpu.resolve_absolute(),
        }
    }
}

impl JumpAddressingMode {
    pub fn fetch_address<M: Memory>(self, cpu: &mut CPU<M>) -> Address {
        match self {
            JumpAddressingMode::Absolute => cpu.fetch_address_at_program_counter(),
            JumpAddressingMode::Indirect => {
                let pointer = cpu.fetch_address_at_program_counter();
                cpu.read_address(pointer)
            }
        }
    }
}

impl<M: Memory> CPU<M> {
    fn resolve_immediate(&mut self) -> Reference {
        let reference = Reference::Address(self.program_counter);
        self.fetch_at_program_counter();
        reference
    }

    fn resolve_zero_page(&mut self) -> Reference {
        let operand = self.fetch_at_program_counter();
        Reference::Address(Address::zero_page(operand))
    }

    fn resolve_zero_page_indexed(&mut self, index: u8) -> Reference {
        let operand = self.fetch_at_program_counter();
        // Dummy read at the unindexed address: real hardware computes `operand + index` on the
        // bus cycle that would otherwise read it.
        self.cycle_count += 1;
        Reference::Address(Address::zero_page(operand.wrapping_add(index)))
    }

    fn resolve_absolute(&mut self) -> Reference {
        Reference::Address(self.fetch_address_at_program_counter())
    }

    fn resolve_absolute_indexed(&mut self, index: u8, force_extra_cycle: bool) -> Reference {
        let base = self.fetch_address_at_program_counter();
        let address = base + index;
        if force_extra_cycle || address.page_crossed(base) {
            self.cycle_count += 1;
        }
        Reference::Address(address)
    }

    fn resolve_indexed_indirect(&mut self) -> Reference {
        let pointer = self.fetch_at_program_counter();
        // Dummy read of the unindexed zero-page pointer while X is added to it.
        self.cycle_count += 1;
        let address = self.read_zero_page_address(pointer.wrapping_add(self.x));
        Reference::Address(address)
    }

    fn resolve_indirect_indexed(&mut self, force_extra_cycle: bool) -> Reference {
        let pointer = self.fetch_at_program_counter();
        let base = self.read_zero_page_address(pointer);
        let address = base + self.y;
        if force_extra_cycle || address.page_crossed(base) {
            self.cycle_count += 1;
        }
        Reference::Address(address)
    }

    fn read_zero_page_address(&mut self, offset: u8) -> Address {
        let lower = self.read(Address::zero_page(offset));
        let higher = self.read(Address::zero_page(offset.wrapping_add(1)));
        Address::from_bytes(higher, lower)
    }
}
