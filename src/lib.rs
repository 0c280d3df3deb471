//! Core instruction set, register file, memory model and executor for the
//! edu16 teaching microprocessor. The `asm` and `emu` workspace members
//! build the assembler and emulator binaries on top of this crate.

pub mod constants;
pub mod executor;
pub mod memory;
pub mod opcode;

pub use executor::{ExecutorError, Processor, StepOutcome};
pub use opcode::{Decoded, Mnemonic, OpCode, OperandShape, UnknownOpcode};
