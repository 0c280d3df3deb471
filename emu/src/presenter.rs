use edu16::constants::{DISPLAY_COLUMNS, DISPLAY_ROWS, REGISTER_COUNT};
use edu16::memory::Display;
use std::fmt;

const HEX_DIGITS: [char; 16] =
    ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F'];

/// A snapshot of everything the emulator prints for one cycle. Building
/// this as an owned, `Display`-able value (rather than printing straight
/// from `Processor`) keeps the rendering logic testable without a live
/// machine.
pub struct Presenter<'a> {
    pub cycle: u64,
    pub pc: u16,
    pub instruction: u16,
    pub registers: &'a [u16; REGISTER_COUNT],
    pub display: &'a Display,
    pub show_display: bool,
}

impl<'a> fmt::Display for Presenter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "CLOCK CYCLE: {}", self.cycle)?;
        writeln!(f, "    COUNTER: {}", format_word(self.pc))?;
        writeln!(f, "INSTRUCTION: {}", format_word(self.instruction))?;
        writeln!(f)?;
        writeln!(f, "--------------- REGISTERS ---------------")?;
        writeln!(f)?;
        for pair in (0..REGISTER_COUNT).step_by(2) {
            writeln!(
                f,
                "{} {} - {} {}",
                HEX_DIGITS[pair],
                format_word(self.registers[pair]),
                format_word(self.registers[pair + 1]),
                HEX_DIGITS[pair + 1],
            )?;
        }
        if self.show_display {
            writeln!(f)?;
            writeln!(f, "---------------- SCREEN -----------------")?;
            writeln!(f)?;
            write_screen(f, self.display)?;
        }
        Ok(())
    }
}

/// 16-bit value as binary, grouped by byte with a space between them.
fn format_word(value: u16) -> String {
    let bits: String = (0..16).map(|i| if value & (1 << (15 - i)) != 0 { '1' } else { '0' }).collect();
    format!("{} {}", &bits[0..8], &bits[8..16])
}

fn write_screen(f: &mut fmt::Formatter, display: &Display) -> fmt::Result {
    let border: String = "-".repeat(2 * DISPLAY_COLUMNS + 1);
    writeln!(f, "{}", border)?;

    let columns: Vec<u8> = display.columns_left_to_right().collect();
    for row in 0..DISPLAY_ROWS {
        let mask = 1u8 << (7 - row);
        write!(f, "|")?;
        for (index, column) in columns.iter().enumerate() {
            write!(f, "{}", if column & mask != 0 { '*' } else { ' ' })?;
            if index + 1 < columns.len() {
                write!(f, " ")?;
            }
        }
        writeln!(f, "|")?;
    }

    writeln!(f, "{}", border)
}
