use crate::constants::*;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

// Instruction word layout:
//
//       +------+-----+-----+-----+
//       |15  12|11  8|7   4|3   0|
//       +------+-----+-----+-----+
//       |opcode|  rD |  rA |  rB |
//       +------+-----+-----+-----+
//
// `rA`/`rB` are read back by the executor either as register indices or as a
// 4-bit immediate, depending on the opcode (see `OperandShape`). For SET and
// SETH the low byte is a raw 8-bit immediate and `rA`/`rB` are just a nibble
// view onto it.

#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum OpCode {
    Move,
    Not,
    And,
    Orr,
    Add,
    Sub,
    Addi,
    Subi,
    Set,
    Seth,
    Inciz,
    Decin,
    Movez,
    Movex,
    Movep,
    Moven,
}

/// The shape of a mnemonic's source operands, in the order they appear after
/// the mnemonic token. This also determines how they're packed positionally
/// into the `rD`/`rA`/`rB` nibbles - the second operand always lands in `rA`
/// and the third in `rB`, whether or not that operand is a register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperandShape {
    /// `rD, rA`
    RegReg,
    /// `rD, rA, rB`
    RegRegReg,
    /// `rD, rA, imm4`
    RegRegImm4,
    /// `rD, imm8`
    RegImm8,
    /// `rD, imm4, rB`
    RegImm4Reg,
}

impl OperandShape {
    /// Number of source tokens following the mnemonic, i.e. the encoder's arity.
    pub fn arity(self) -> usize {
        match self {
            OperandShape::RegReg => 2,
            OperandShape::RegRegReg => 3,
            OperandShape::RegRegImm4 => 3,
            OperandShape::RegImm8 => 2,
            OperandShape::RegImm4Reg => 3,
        }
    }
}

pub struct Mnemonic {
    pub opcode: OpCode,
    pub short: &'static str,
    pub long: &'static str,
    pub shape: OperandShape,
}

pub const MNEMONICS: &[Mnemonic] = &[
    Mnemonic { opcode: OpCode::Move, short: "mov", long: "move", shape: OperandShape::RegReg },
    Mnemonic { opcode: OpCode::Not, short: "not", long: "not", shape: OperandShape::RegReg },
    Mnemonic { opcode: OpCode::And, short: "and", long: "and", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Orr, short: "orr", long: "or", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Add, short: "add", long: "add", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Sub, short: "sub", long: "sub", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Addi, short: "adi", long: "addi", shape: OperandShape::RegRegImm4 },
    Mnemonic { opcode: OpCode::Subi, short: "sbi", long: "subi", shape: OperandShape::RegRegImm4 },
    Mnemonic { opcode: OpCode::Set, short: "set", long: "set", shape: OperandShape::RegImm8 },
    Mnemonic { opcode: OpCode::Seth, short: "sth", long: "seth", shape: OperandShape::RegImm8 },
    Mnemonic { opcode: OpCode::Inciz, short: "inc", long: "inciz", shape: OperandShape::RegImm4Reg },
    Mnemonic { opcode: OpCode::Decin, short: "dec", long: "decin", shape: OperandShape::RegImm4Reg },
    Mnemonic { opcode: OpCode::Movez, short: "mvz", long: "movez", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Movex, short: "mvx", long: "movex", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Movep, short: "mvp", long: "movep", shape: OperandShape::RegRegReg },
    Mnemonic { opcode: OpCode::Moven, short: "mvn", long: "moven", shape: OperandShape::RegRegReg },
];

/// Looks up a mnemonic by its short or long form (case-sensitive; callers
/// lower-case the source token first, per the lexer contract).
pub fn find_mnemonic(token: &str) -> Option<&'static Mnemonic> {
    MNEMONICS.iter().find(|m| m.short == token || m.long == token)
}

/// A fully decoded instruction word: the four nibbles, named per the wire layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Decoded {
    pub opcode: OpCode,
    pub rd: u8,
    pub ra: u8,
    pub rb: u8,
}

/// Returned when a word's opcode nibble doesn't map to a known `OpCode`.
/// Can't happen for words produced by `encode_*`, but the executor must
/// still be able to report it for an arbitrary ROM word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnknownOpcode(pub u16);

pub fn decode(word: u16) -> Result<Decoded, UnknownOpcode> {
    let opcode_value = ((word & OPCODE_MASK) >> OPCODE_OFFSET) as u32;
    let opcode = OpCode::from_u32(opcode_value).ok_or(UnknownOpcode(word))?;

    Ok(Decoded {
        opcode,
        rd: ((word & RD_MASK) >> RD_OFFSET) as u8,
        ra: ((word & RA_MASK) >> RA_OFFSET) as u8,
        rb: ((word & RB_MASK) >> RB_OFFSET) as u8,
    })
}

/// Packs an opcode and three nibbles (register indices or a split
/// immediate — the caller picks which, per `OperandShape`) into a word.
pub fn encode_nibbles(opcode: OpCode, rd: u8, ra: u8, rb: u8) -> u16 {
    ((opcode.to_u16().unwrap()) << OPCODE_OFFSET & OPCODE_MASK)
        | ((rd as u16) << RD_OFFSET & RD_MASK)
        | ((ra as u16) << RA_OFFSET & RA_MASK)
        | ((rb as u16) << RB_OFFSET & RB_MASK)
}

/// Packs an opcode, a destination register and a raw 8-bit immediate (SET/SETH).
pub fn encode_imm8(opcode: OpCode, rd: u8, imm8: u8) -> u16 {
    ((opcode.to_u16().unwrap()) << OPCODE_OFFSET & OPCODE_MASK)
        | ((rd as u16) << RD_OFFSET & RD_MASK)
        | (imm8 as u16 & LOW_BYTE_MASK)
}
