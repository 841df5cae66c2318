//! Emulates the 6502's instruction-execution core: registers, flags, the stack, and the
//! dispatch loop that turns opcode bytes into register/memory mutations plus a cycle count.
//!
//! An instruction comprises:
//! - A 1-byte opcode, comprising instruction and addressing mode.
//! - 0-2 byte operands.

use std::fmt;

use bitflags::bitflags;
use log::trace;

use crate::address::Address;
use crate::error::CpuError;
use crate::memory::Memory;

pub use self::instruction::instructions;
pub use self::instruction::Instruction;
pub use self::stack::StackPointer;

mod addressing_modes;
mod instruction;
pub mod stack;

const NMI_VECTOR: Address = Address::new(0xFFFA);
const RESET_VECTOR: Address = Address::new(0xFFFC);
const IRQ_VECTOR: Address = Address::new(0xFFFE);

/// A MOS 6502 core, generic over the memory it executes against.
///
/// Construct one with [`CPU::with_memory`], which performs the same register initialisation as
/// a hardware reset. Call [`CPU::step`] to execute one instruction, or [`CPU::irq`]/
/// [`CPU::nmi`]/[`CPU::reset`] to simulate the corresponding pin being asserted.
#[derive(Debug)]
pub struct CPU<M> {
    memory: M,
    /// A - 8-bit accumulator register.
    accumulator: u8,
    /// PC - 16-bit program counter register.
    program_counter: Address,
    /// X - 8-bit index register.
    x: u8,
    /// Y - 8-bit index register.
    y: u8,
    /// S - 8-bit stack pointer, indexed into the fixed page [`stack::BASE`].
    stack_pointer: StackPointer,
    /// P - 8-bit status register.
    status: Status,
    // Counts cycles taken running the current instruction/interrupt.
    cycle_count: u8,
}

impl<M: Memory> CPU<M> {
    /// Builds a CPU in its post-reset state: `AC`/`X`/`Y` zeroed, `SP` at `0xFF`, `I` and `U` set
    /// in the status register, and `PC` loaded from the reset vector at `0xFFFC`/`0xFFFD`.
    pub fn with_memory(mut memory: M) -> Self {
        let lower = memory.read(RESET_VECTOR);
        let higher = memory.read(RESET_VECTOR + 1u8);
        let program_counter = Address::from_bytes(higher, lower);

        CPU {
            memory,
            accumulator: 0,
            program_counter,
            x: 0,
            y: 0,
            stack_pointer: StackPointer::default(),
            status: Status::INTERRUPT_DISABLE | Status::UNUSED,
            cycle_count: 0,
        }
    }

    pub fn program_counter(&self) -> Address {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, address: Address) {
        self.program_counter = address;
    }

    pub fn memory(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Reads a byte through the CPU, counting it as one bus cycle. Exposed publicly so hosts
    /// (and tests) can inspect memory without reaching past the CPU into the [`Memory`] directly.
    pub fn read(&mut self, address: Address) -> u8 {
        self.cycle_count += 1;
        self.memory.read(address)
    }

    pub fn write(&mut self, address: Address, byte: u8) {
        self.cycle_count += 1;
        self.memory.write(address, byte);
    }

    /// Reads a little-endian 16-bit pointer, replicating the NMOS indirect-addressing page-wrap
    /// bug: if `address` is the last byte of a page, the high byte is read from the start of
    /// that same page rather than spilling into the next one.
    fn read_address(&mut self, address: Address) -> Address {
        let lower = self.read(address);
        let higher = self.read(address.incr_lower());
        Address::from_bytes(higher, lower)
    }

    /// Fetches the next opcode, decodes it, and executes it, returning the number of cycles it
    /// took. Fails fatally if the byte does not correspond to one of the 151 documented opcodes.
    pub fn step(&mut self) -> Result<i32, CpuError> {
        self.cycle_count = 0;

        let opcode_address = self.program_counter;
        let opcode = self.fetch_at_program_counter();

        let instruction =
            Instruction::from_opcode(opcode).ok_or(CpuError::IllegalInstruction {
                opcode,
                address: opcode_address,
            })?;

        trace!("{}  {:#04x}  {:?}", opcode_address, opcode, instruction);

        self.handle_instruction(instruction);

        Ok(i32::from(self.cycle_count))
    }

    /// Simulates the maskable interrupt request line. A no-op (and zero cycles) while the
    /// interrupt-disable flag is set; otherwise behaves like `BRK` with `B` cleared in the
    /// pushed status and no program-counter adjustment, consuming 7 cycles.
    pub fn irq(&mut self) -> i32 {
        if self.status.contains(Status::INTERRUPT_DISABLE) {
            return 0;
        }

        self.interrupt(IRQ_VECTOR, false);
        7
    }

    /// Simulates the non-maskable interrupt line: unconditional, vectors through `0xFFFA`, `B`
    /// cleared in the pushed status, 8 cycles.
    pub fn nmi(&mut self) -> i32 {
        self.interrupt(NMI_VECTOR, false);
        8
    }

    /// Restores the post-power-on register state (see [`CPU::with_memory`]) and reloads `PC`
    /// from the reset vector. Fixed at 8 cycles.
    pub fn reset(&mut self) -> i32 {
        self.accumulator = 0;
        self.x = 0;
        self.y = 0;
        self.stack_pointer = StackPointer::default();
        self.status = Status::INTERRUPT_DISABLE | Status::UNUSED;
        self.program_counter = self.read_address(RESET_VECTOR);
        8
    }

    fn handle_instruction(&mut self, instruction: Instruction) {
        use self::instruction::Instruction::*;

        match instruction {
            // Load/Store Operations
            LDA(addressing_mode) => self.lda(addressing_mode),
            LDX(addressing_mode) => self.ldx(addressing_mode),
            LDY(addressing_mode) => self.ldy(addressing_mode),
            STA(addressing_mode) => self.sta(addressing_mode),
            STX(addressing_mode) => self.stx(addressing_mode),
            STY(addressing_mode) => self.sty(addressing_mode),

            // Register Transfers
            TAX => self.tax(),
            TAY => self.tay(),
            TXA => self.txa(),
            TYA => self.tya(),

            // Stack Operations
            TSX => self.tsx(),
            TXS => self.txs(),
            PHA => self.pha(),
            PHP => self.php(),
            PLA => self.pla(),
            PLP => self.plp(),

            // Logical
            AND(addressing_mode) => self.and(addressing_mode),
            EOR(addressing_mode) => self.eor(addressing_mode),
            ORA(addressing_mode) => self.ora(addressing_mode),
            BIT(addressing_mode) => self.bit(addressing_mode),

            // Arithmetic
            ADC(addressing_mode) => self.adc(addressing_mode),
            SBC(addressing_mode) => self.sbc(addressing_mode),
            CMP(addressing_mode) => self.cmp(addressing_mode),
            CPX(addressing_mode) => self.cpx(addressing_mode),
            CPY(addressing_mode) => self.cpy(addressing_mode),

            // Increments & Decrements
            INC(addressing_mode) => self.inc(addressing_mode),
            INX => self.inx(),
            INY => self.iny(),
            DEC(addressing_mode) => self.dec(addressing_mode),
            DEX => self.dex(),
            DEY => self.dey(),

            // Shifts
            ASL(addressing_mode) => {
                self.asl(addressing_mode);
            }
            LSR(addressing_mode) => {
                self.lsr(addressing_mode);
            }
            ROL(addressing_mode) => {
                self.rol(addressing_mode);
            }
            ROR(addressing_mode) => {
                self.ror(addressing_mode);
            }

            // Jumps & Calls
            JMP(addressing_mode) => self.jmp(addressing_mode),
            JSR => self.jsr(),
            RTS => self.rts(),

            // Branches
            BCC => self.bcc(),
            BCS => self.bcs(),
            BEQ => self.beq(),
            BMI => self.bmi(),
            BNE => self.bne(),
            BPL => self.bpl(),
            BVC => self.bvc(),
            BVS => self.bvs(),

            // Status Flag Changes
            CLC => self.clc(),
            CLD => self.cld(),
            CLI => self.cli(),
            CLV => self.clv(),
            SEC => self.sec(),
            SED => self.sed(),
            SEI => self.sei(),

            // System Functions
            BRK => self.brk(),
            NOP => self.nop(),
            RTI => self.rti(),
        }
    }

    /// Pushes `PC` (high then low) and the status register (forcing `U` and the requested `B`)
    /// onto the stack, sets `I`, then loads `PC` from `address_vector`. Shared by `BRK`/`IRQ`/`NMI`.
    fn interrupt(&mut self, address_vector: Address, break_flag: bool) {
        let data = self.program_counter;

        self.push_stack(data.higher());
        self.push_stack(data.lower());
        self.push_status(break_flag);

        self.status.insert(Status::INTERRUPT_DISABLE);
        self.program_counter = self.read_address(address_vector);
    }

    fn push_status(&mut self, break_flag: bool) {
        let mut status = self.status;
        status.insert(Status::UNUSED);
        status.set(Status::BREAK, break_flag);
        self.push_stack(status.bits());
    }

    /// `ADC`, binary or decimal depending on the `D` flag. N/Z/V are always derived from the
    /// binary sum, matching documented NMOS decimal-mode behaviour.
    fn add_to_accumulator(&mut self, value: u8) {
        let accumulator = self.accumulator;
        let carry_in = self.status.contains(Status::CARRY);

        let full_result = u16::from(accumulator)
            .wrapping_add(u16::from(value))
            .wrapping_add(carry_in as u16);

        let binary_result = full_result as u8;
        let binary_carry = full_result & (1 << 8) != 0;

        let overflow =
            (((accumulator ^ binary_result) & (value ^ binary_result)) as i8).is_negative();
        self.status.set(Status::OVERFLOW, overflow);
        self.status.set_flags(binary_result);

        if self.status.contains(Status::DECIMAL) {
            let (decimal_result, decimal_carry) =
                crate::bcd::decimal_add(accumulator, value, carry_in);
            self.accumulator = decimal_result;
            self.status.set(Status::CARRY, decimal_carry);
        } else {
            self.accumulator = binary_result;
            self.status.set(Status::CARRY, binary_carry);
        }
    }

    /// `SBC`. In binary mode this is just `ADC` of the complemented operand; in decimal mode the
    /// flags still follow that binary complement (per documented NMOS behaviour) but the stored
    /// result comes from a genuine packed-BCD subtraction.
    fn sub_from_accumulator(&mut self, value: u8) {
        if !self.status.contains(Status::DECIMAL) {
            self.add_to_accumulator(!value);
            return;
        }

        let accumulator = self.accumulator;
        let carry_in = self.status.contains(Status::CARRY);
        let complement = !value;

        let full_result = u16::from(accumulator)
            .wrapping_add(u16::from(complement))
            .wrapping_add(carry_in as u16);
        let binary_result = full_result as u8;

        let overflow =
            (((accumulator ^ binary_result) & (complement ^ binary_result)) as i8).is_negative();
        self.status.set(Status::OVERFLOW, overflow);
        self.status.set_flags(binary_result);

        let (decimal_result, decimal_carry) = crate::bcd::decimal_sub(accumulator, value, carry_in);
        self.accumulator = decimal_result;
        self.status.set(Status::CARRY, decimal_carry);
    }

    fn push_stack(&mut self, byte: u8) {
        let stack_address = self.stack_pointer.address();
        self.write(stack_address, byte);
        self.stack_pointer.decrement();
    }

    fn increment_stack(&mut self) {
        self.stack_pointer.increment();
        self.cycle_count += 1;
    }

    fn pull_and_increment_stack(&mut self) -> u8 {
        let stack_address = self.stack_pointer.address();
        self.stack_pointer.increment();
        self.read(stack_address)
    }

    fn pull_stack(&mut self) -> u8 {
        let stack_address = self.stack_pointer.address();
        self.read(stack_address)
    }

    fn compare(&mut self, register: u8, value: u8) {
        let (result, borrowed) = register.overflowing_sub(value);
        self.status.set(Status::CARRY, !borrowed);
        self.status.set_flags(result);
    }

    fn set_reference(&mut self, reference: Reference, value: u8) {
        self.write_reference(reference, value);
        self.status.set_flags(value);
    }

    fn set_accumulator(&mut self, value: u8) {
        self.set_reference(Reference::Accumulator, value);
    }

    fn set_x(&mut self, value: u8) {
        self.set_reference(Reference::X, value);
    }

    fn set_y(&mut self, value: u8) {
        self.set_reference(Reference::Y, value);
    }

    fn fetch_ref<T: ReferenceAddressingMode>(&mut self, addressing_mode: T) -> Reference {
        addressing_mode.fetch_ref(self)
    }

    fn fetch<T: ReferenceAddressingMode>(&mut self, addressing_mode: T) -> u8 {
        let reference = self.fetch_ref(addressing_mode);
        self.read_reference(reference)
    }

    fn read_reference(&mut self, reference: Reference) -> u8 {
        match reference {
            Reference::Address(address) => self.read(address),
            Reference::Accumulator => self.accumulator,
            Reference::X => self.x,
            Reference::Y => self.y,
        }
    }

    fn write_reference(&mut self, reference: Reference, byte: u8) {
        trace!("        {} := {:#04x}", reference, byte);
        match reference {
            Reference::Address(address) => self.write(address, byte),
            Reference::Accumulator => self.accumulator = byte,
            Reference::X => self.x = byte,
            Reference::Y => self.y = byte,
        };
    }

    /// Reads the byte at `PC` and advances past it. Used for every real operand byte: opcodes,
    /// immediate values, zero-page/absolute address bytes, and branch offsets.
    fn fetch_at_program_counter(&mut self) -> u8 {
        let data = self.read(self.program_counter);
        self.program_counter += 1u16;
        data
    }

    /// Reads the byte at `PC` without advancing, charging a cycle for it. Real hardware performs
    /// this as a throwaway fetch of the following byte on single-byte (implied-addressing)
    /// instructions; it costs a cycle but has no architectural effect.
    fn ignore_argument(&mut self) {
        self.read(self.program_counter);
    }

    fn fetch_address_at_program_counter(&mut self) -> Address {
        let lower = self.fetch_at_program_counter();
        let higher = self.fetch_at_program_counter();
        Address::from_bytes(higher, lower)
    }
}

pub(crate) trait ReferenceAddressingMode {
    fn fetch_ref<M: Memory>(self, cpu: &mut CPU<M>) -> Reference;
}

/// A resolved operand location: either a memory address or one of the registers that some
/// instructions can also target (e.g. `ASL A`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Reference {
    Address(Address),
    Accumulator,
    X,
    Y,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Address(address) => write!(f, "{}", address),
            Reference::Accumulator => f.write_str("A"),
            Reference::X => f.write_str("X"),
            Reference::Y => f.write_str("Y"),
        }
    }
}

bitflags! {
    /// The processor status register. Bit positions are architecturally fixed and must not be
    /// reordered: programs observe this layout directly via `PHP`/`PLP` and `BRK`.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct Status: u8 {
        const NEGATIVE          = 0b1000_0000;
        const OVERFLOW          = 0b0100_0000;
        const UNUSED            = 0b0010_0000;
        const BREAK             = 0b0001_0000;
        const DECIMAL           = 0b0000_1000;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const ZERO              = 0b0000_0010;
        const CARRY             = 0b0000_0001;
    }
}

impl Status {
    fn set_flags(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, (value as i8).is_negative());
    }
}
