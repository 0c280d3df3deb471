#[macro_use]
extern crate clap;

mod presenter;

use clap::Arg;
use edu16::{ExecutorError, Processor, StepOutcome};
use presenter::Presenter;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Debug)]
enum Error {
    Io(io::Error, PathBuf),
    Fatal(ExecutorError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "reading ROM \"{}\" failed: {}", path.display(), err),
            Error::Fatal(err) => write!(f, "FATAL ERROR - {}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("rom")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("ROM")
                .required(true)
                .help("Sets the ROM file to load"),
        )
        .arg(
            Arg::with_name("delay")
                .short("d")
                .long("delay")
                .takes_value(true)
                .value_name("DELAY")
                .default_value("1000")
                .help("Sets the delay between clock cycles, in milliseconds"),
        )
        .arg(
            Arg::with_name("suppress_display")
                .short("s")
                .long("suppress-display")
                .help("Hides the emulated display panel"),
        )
        .get_matches();

    let rom_path = matches.value_of("rom").unwrap();
    let delay_ms: u64 = value_t!(matches.value_of("delay"), u64).unwrap_or(1000);
    let show_display = !matches.is_present("suppress_display");

    if let Err(err) = run(rom_path, delay_ms, show_display) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(rom_path: &str, delay_ms: u64, show_display: bool) -> Result<(), Error> {
    let path = PathBuf::from(rom_path);
    let rom = fs::read(&path).map_err(|err| Error::Io(err, path.clone()))?;

    let mut cpu = Processor::new(rom);

    loop {
        match cpu.step() {
            Ok(StepOutcome::Terminated) => return Ok(()),
            Ok(StepOutcome::Executed { word, .. }) => {
                print!("\x1B[2J\x1B[H");
                let presenter = Presenter {
                    cycle: cpu.cycle(),
                    pc: cpu.pc(),
                    instruction: word,
                    registers: cpu.registers(),
                    display: cpu.display(),
                    show_display,
                };
                println!("{}", presenter);

                if cpu.pc() < edu16::constants::MAX_INSTRUCTIONS {
                    thread::sleep(Duration::from_millis(delay_ms));
                }
            }
            Err(err) => return Err(Error::Fatal(err)),
        }
    }
}
