//! Assembles edu16 source text into a ROM byte stream plus a list of
//! line-tagged diagnostics. The top-level entry point, [`assemble`],
//! never aborts partway through: it always tokenizes the full input and
//! returns everything it produced, leaving the emission decision ("was
//! the error count zero?") to the caller (see `main.rs`).

pub mod diagnostic;
mod encoder;
mod include;
mod lexer;
pub mod operand;

use diagnostic::{Category, Diagnostic};
use edu16::constants::ASSEMBLER_ROM_BYTES;

/// The result of assembling one source stream: the ROM bytes produced so
/// far (which may be a truncated, over-budget prefix) and every
/// diagnostic raised along the way.
#[derive(Clone, Debug, Default)]
pub struct Assembly {
    pub rom: Vec<u8>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub(crate) fn empty() -> Assembly {
        Assembly::default()
    }

    /// Warnings don't gate emission - only these do.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_warning()).count()
    }

    pub(crate) fn append_bytes(&mut self, line: u32, bytes: &[u8]) {
        for &byte in bytes {
            if self.rom.len() < ASSEMBLER_ROM_BYTES {
                self.rom.push(byte);
            } else {
                self.diagnostics.push(Diagnostic::out_of_memory(line));
            }
        }
    }
}

/// Assembles a complete source stream (a top-level file, or the body of
/// an `include`d one) into an [`Assembly`].
pub fn assemble(source: &str) -> Assembly {
    let mut assembly = Assembly::empty();

    for (index, raw_line) in source.lines().enumerate() {
        let line = index as u32 + 1;
        let tokens = lexer::tokenize(raw_line);
        if tokens.is_empty() {
            continue;
        }
        process_line(&mut assembly, line, tokens);
    }

    assembly
}

fn process_line(assembly: &mut Assembly, line: u32, mut tokens: Vec<String>) {
    tokens[0] = tokens[0].to_ascii_lowercase();

    match tokens[0].as_str() {
        "include" => return include::include(assembly, line, &tokens[1..]),
        "includebin" => return include::include_binary(assembly, line, &tokens[1..]),
        _ => {}
    }

    match encoder::lookup(line, &tokens) {
        encoder::Lookup::Unrecognized => assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::UnrecognizedCommand,
            format!("'{}'", tokens[0]),
        )),
        encoder::Lookup::ArityMismatch(diag) => assembly.diagnostics.push(diag),
        encoder::Lookup::Ready(mnemonic, operands) => {
            if assembly.rom.len() + 2 > ASSEMBLER_ROM_BYTES {
                assembly.diagnostics.push(Diagnostic::out_of_memory(line));
                return;
            }
            match encoder::encode_operands(line, mnemonic, operands) {
                encoder::Outcome::Bytes(bytes) => assembly.append_bytes(line, &bytes),
                encoder::Outcome::Error(diag) => assembly.diagnostics.push(diag),
            }
        }
    }
}
