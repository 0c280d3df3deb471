use crate::diagnostic::{Category, Diagnostic};
use crate::Assembly;
use std::fs;

/// `include <path>`: recursively assembles `path` as a fresh source
/// stream and appends the resulting bytes at the current ROM index.
/// Nested diagnostics are folded into the caller's - this is the
/// in-process stand-in for the original's fork-and-capture-output step.
pub fn include(assembly: &mut Assembly, line: u32, operands: &[String]) {
    if operands.is_empty() {
        assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::Assembler,
            "include statement requires file pointer",
        ));
        return;
    }
    warn_on_trailing_tokens(assembly, line, operands);

    let path = &operands[0];
    match fs::read_to_string(path) {
        Ok(source) => {
            let nested = crate::assemble(&source);
            assembly.diagnostics.extend(nested.diagnostics);
            assembly.append_bytes(line, &nested.rom);
        }
        Err(_) => assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::Assembler,
            format!("File pointer '{}' not valid", path),
        )),
    }
}

/// `includebin <path>`: appends the raw bytes of `path` verbatim.
pub fn include_binary(assembly: &mut Assembly, line: u32, operands: &[String]) {
    if operands.is_empty() {
        assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::Assembler,
            "includebin statement requires file pointer",
        ));
        return;
    }
    warn_on_trailing_tokens(assembly, line, operands);

    let path = &operands[0];
    match fs::read(path) {
        Ok(bytes) => assembly.append_bytes(line, &bytes),
        Err(_) => assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::Assembler,
            format!("File pointer '{}' not valid", path),
        )),
    }
}

fn warn_on_trailing_tokens(assembly: &mut Assembly, line: u32, operands: &[String]) {
    if operands.len() > 1 {
        assembly.diagnostics.push(Diagnostic::new(
            line,
            Category::Warning,
            "trailing tokens after the file path are ignored",
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_path_reports_assembler_error() {
        let mut assembly = Assembly::empty();
        include(&mut assembly, 1, &[]);
        assert_eq!(assembly.diagnostics[0].category, Category::Assembler);
    }

    #[test]
    fn unreadable_file_reports_assembler_error() {
        let mut assembly = Assembly::empty();
        include(&mut assembly, 1, &["/nonexistent/path/does-not-exist.s".to_string()]);
        assert_eq!(assembly.diagnostics[0].category, Category::Assembler);
    }

    #[test]
    fn trailing_tokens_produce_a_warning_but_nothing_fatal() {
        let mut assembly = Assembly::empty();
        include_binary(&mut assembly, 1, &["/nonexistent".to_string(), "extra".to_string()]);
        assert!(assembly.diagnostics.iter().any(|d| d.is_warning()));
    }
}
