use byteorder::{BigEndian, ByteOrder};
use crate::diagnostic::{Category, Diagnostic};
use crate::operand::{parse_literal, parse_register};
use edu16::constants::{IMM4_MAX, IMM8_MAX};
use edu16::opcode::{encode_imm8, encode_nibbles, find_mnemonic, Mnemonic, OperandShape};

/// Result of attempting to encode one recognized-mnemonic line whose
/// arity already matched.
pub enum Outcome {
    Bytes([u8; 2]),
    Error(Diagnostic),
}

/// The result of resolving a line's mnemonic and arity, before any
/// ROM-capacity or operand-range check runs. Capacity is checked only
/// once arity is known to be correct, mirroring the order the original
/// assembler checks things in.
pub enum Lookup<'a> {
    Unrecognized,
    ArityMismatch(Diagnostic),
    Ready(&'a Mnemonic, &'a [String]),
}

pub fn lookup<'a>(line: u32, tokens: &'a [String]) -> Lookup<'a> {
    let mnemonic = match find_mnemonic(tokens[0].as_str()) {
        Some(m) => m,
        None => return Lookup::Unrecognized,
    };
    let operands = &tokens[1..];
    if operands.len() != mnemonic.shape.arity() {
        return Lookup::ArityMismatch(Diagnostic::new(
            line,
            Category::Syntax,
            format!("{} command takes {} arguments", label(mnemonic), mnemonic.shape.arity()),
        ));
    }
    Lookup::Ready(mnemonic, operands)
}

/// Range-checks operands and packs them, once arity and ROM capacity are
/// both already known to be fine.
pub fn encode_operands(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match mnemonic.shape {
        OperandShape::RegReg => encode_reg_reg(line, mnemonic, operands),
        OperandShape::RegRegReg => encode_reg_reg_reg(line, mnemonic, operands),
        OperandShape::RegRegImm4 => encode_reg_reg_imm4(line, mnemonic, operands),
        OperandShape::RegImm8 => encode_reg_imm8(line, mnemonic, operands),
        OperandShape::RegImm4Reg => encode_reg_imm4_reg(line, mnemonic, operands),
    }
}

fn label(mnemonic: &Mnemonic) -> String {
    let long = mnemonic.long.to_uppercase();
    let short = mnemonic.short.to_uppercase();
    if long == short {
        long
    } else {
        format!("{} ({})", long, short)
    }
}

fn range_error(line: u32, mnemonic: &Mnemonic) -> Diagnostic {
    let suffix = match mnemonic.shape {
        OperandShape::RegReg => "2 Registers",
        OperandShape::RegRegReg => "3 Registers",
        OperandShape::RegRegImm4 | OperandShape::RegImm4Reg => "2 Registers and a Constant",
        OperandShape::RegImm8 => "1 Register and 1 Constant",
    };
    Diagnostic::new(line, Category::Syntax, format!("{} command takes {}", label(mnemonic), suffix))
}

fn imm(token: &str, max: i64) -> Option<u8> {
    parse_literal(token).filter(|&v| v >= 0 && v <= max).map(|v| v as u8)
}

/// Word to wire bytes, big-endian - the ROM's on-disk byte order.
fn to_bytes(word: u16) -> [u8; 2] {
    let mut bytes = [0u8; 2];
    BigEndian::write_u16(&mut bytes, word);
    bytes
}

fn encode_reg_reg(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match (parse_register(&operands[0]), parse_register(&operands[1])) {
        (Some(rd), Some(ra)) => Outcome::Bytes(to_bytes(encode_nibbles(mnemonic.opcode, rd, ra, 0))),
        _ => Outcome::Error(range_error(line, mnemonic)),
    }
}

fn encode_reg_reg_reg(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match (
        parse_register(&operands[0]),
        parse_register(&operands[1]),
        parse_register(&operands[2]),
    ) {
        (Some(rd), Some(ra), Some(rb)) => {
            Outcome::Bytes(to_bytes(encode_nibbles(mnemonic.opcode, rd, ra, rb)))
        }
        _ => Outcome::Error(range_error(line, mnemonic)),
    }
}

fn encode_reg_reg_imm4(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match (
        parse_register(&operands[0]),
        parse_register(&operands[1]),
        imm(&operands[2], IMM4_MAX),
    ) {
        (Some(rd), Some(ra), Some(imm4)) => {
            Outcome::Bytes(to_bytes(encode_nibbles(mnemonic.opcode, rd, ra, imm4)))
        }
        _ => Outcome::Error(range_error(line, mnemonic)),
    }
}

fn encode_reg_imm4_reg(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match (
        parse_register(&operands[0]),
        imm(&operands[1], IMM4_MAX),
        parse_register(&operands[2]),
    ) {
        (Some(rd), Some(imm4), Some(rb)) => {
            Outcome::Bytes(to_bytes(encode_nibbles(mnemonic.opcode, rd, imm4, rb)))
        }
        _ => Outcome::Error(range_error(line, mnemonic)),
    }
}

fn encode_reg_imm8(line: u32, mnemonic: &Mnemonic, operands: &[String]) -> Outcome {
    match (parse_register(&operands[0]), imm(&operands[1], IMM8_MAX)) {
        (Some(rd), Some(imm8)) => Outcome::Bytes(to_bytes(encode_imm8(mnemonic.opcode, rd, imm8))),
        _ => Outcome::Error(range_error(line, mnemonic)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    fn encode(line: u32, tokens: &[String]) -> Option<Outcome> {
        match lookup(line, tokens) {
            Lookup::Unrecognized => None,
            Lookup::ArityMismatch(diag) => Some(Outcome::Error(diag)),
            Lookup::Ready(mnemonic, operands) => Some(encode_operands(line, mnemonic, operands)),
        }
    }

    #[test]
    fn encodes_set_scenario_bytes() {
        match encode(1, &tokens("set r0 x0A")) {
            Some(Outcome::Bytes(bytes)) => assert_eq!(bytes, [0x80, 0x0A]),
            _ => panic!("expected bytes"),
        }
    }

    #[test]
    fn encodes_add_scenario_bytes() {
        match encode(2, &tokens("add r1 r0 r0")) {
            Some(Outcome::Bytes(bytes)) => assert_eq!(bytes, [0x41, 0x00]),
            _ => panic!("expected bytes"),
        }
    }

    #[test]
    fn inciz_packs_immediate_into_ra_nibble() {
        match encode(1, &tokens("inc r0 1 r0")) {
            Some(Outcome::Bytes(bytes)) => assert_eq!(bytes, [0xA0, 0x10]),
            _ => panic!("expected bytes"),
        }
    }

    #[test]
    fn wrong_arity_reports_syntax_error() {
        match encode(1, &tokens("mov r0")) {
            Some(Outcome::Error(diag)) => {
                assert_eq!(diag.to_string(), "line 1 - Syntax Error: MOVE (MOV) command takes 2 arguments");
            }
            _ => panic!("expected an arity error"),
        }
    }

    #[test]
    fn out_of_range_immediate_reports_range_error() {
        match encode(1, &tokens("set r0 x1FF")) {
            Some(Outcome::Error(diag)) => {
                assert_eq!(diag.to_string(), "line 1 - Syntax Error: SET command takes 1 Register and 1 Constant");
            }
            _ => panic!("expected a range error"),
        }
    }

    #[test]
    fn negative_immediate_is_rejected_uniformly() {
        match encode(1, &tokens("adi r0 r1 -1")) {
            Some(Outcome::Error(_)) => {}
            _ => panic!("expected negative immediate to be rejected"),
        }
    }

    #[test]
    fn unknown_mnemonic_returns_none() {
        assert!(encode(1, &tokens("xyzzy r0 r1")).is_none());
    }
}
