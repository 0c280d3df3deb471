use std::io::{self, Read, Write};

#[derive(Debug)]
enum Error {
    ReadStdin(io::Error),
    WriteStdout(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ReadStdin(err) => write!(f, "reading stdin failed: {}", err),
            Error::WriteStdout(err) => write!(f, "writing stdout failed: {}", err),
        }
    }
}

impl std::error::Error for Error {}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Reads the whole of stdin, assembles it, and - only when no error was
/// reported - writes the ROM bytes to stdout. Diagnostics and the final
/// byte count always go to stderr, matching the reference assembler's
/// always-report, conditionally-emit contract.
fn run() -> Result<(), Error> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).map_err(Error::ReadStdin)?;

    let assembly = asm::assemble(&source);

    for diagnostic in &assembly.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if assembly.error_count() == 0 {
        eprintln!("Total Bytes Written: {}", assembly.rom.len());
        io::stdout().write_all(&assembly.rom).map_err(Error::WriteStdout)?;
    }

    Ok(())
}
