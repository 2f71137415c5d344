//! Interactive console menu
//!
//! The loop is generic over its input, output and key source so it can be
//! driven by stdin/stdout in the binary and by in-memory buffers in tests.

use anyhow::{Context, Result};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::keys::KeySource;
use crate::simulation::{RandomSource, Scenario};

/// Number the user types to leave the program
pub const EXIT_CHOICE: i64 = 5;

pub const MENU_TITLE: &str = "Monte Carlo Simulation for Traffic Flow";
pub const PROMPT: &str = "Enter your choice (1-5): ";
pub const CONTINUE_PROMPT: &str = "\nPress any key to continue...";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const INVALID_INPUT: &str = "Invalid input, please enter a number between 1 and 5.";
pub const EXIT_MESSAGE: &str = "Exiting the program.";

/// A valid menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Scenario),
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-5) to its choice
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1..=4 => Some(MenuChoice::Run(Scenario::ALL[(number - 1) as usize])),
            EXIT_CHOICE => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// What a line typed at the prompt turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceInput {
    Valid(MenuChoice),
    /// An integer with no menu entry. Integers too large for `i64`
    /// saturate to `i64::MAX` / `i64::MIN`.
    OutOfRange(i64),
    /// Not an integer at all
    Unparseable(String),
}

/// Parse one line of prompt input. Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> ChoiceInput {
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => match MenuChoice::from_number(number) {
            Some(choice) => ChoiceInput::Valid(choice),
            None => ChoiceInput::OutOfRange(number),
        },
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => ChoiceInput::OutOfRange(i64::MAX),
            IntErrorKind::NegOverflow => ChoiceInput::OutOfRange(i64::MIN),
            _ => ChoiceInput::Unparseable(trimmed.to_string()),
        },
    }
}

/// Options for the menu loop
#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
    /// Clear the terminal before each menu display
    pub clear_screen: bool,
}

/// Write the title, options and prompt
pub fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{}", MENU_TITLE)?;
    for (index, scenario) in Scenario::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, scenario.title())?;
    }
    writeln!(output, "{}. Exit", EXIT_CHOICE)?;
    write!(output, "{}", PROMPT)?;
    output.flush().context("Failed to flush menu prompt")?;
    Ok(())
}

/// Read one line, or `None` once input is exhausted
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Erase the terminal and move the cursor home
pub fn clear_screen<W: Write>(output: &mut W) -> Result<()> {
    execute!(output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
        .context("Failed to clear screen")?;
    Ok(())
}

/// Run the menu until the user exits or input ends
pub fn run_menu<I, W, R, K>(
    input: &mut I,
    output: &mut W,
    rng: &mut R,
    keys: &mut K,
    options: &MenuOptions,
) -> Result<()>
where
    I: BufRead,
    W: Write,
    R: RandomSource + ?Sized,
    K: KeySource,
{
    loop {
        if options.clear_screen {
            clear_screen(output)?;
        }
        write_menu(output)?;

        let Some(line) = read_line(input)? else {
            info!("Input closed at menu prompt, leaving");
            return Ok(());
        };

        match parse_choice(&line) {
            ChoiceInput::Valid(MenuChoice::Exit) => {
                writeln!(output, "{}", EXIT_MESSAGE)?;
                output.flush().context("Failed to flush output")?;
                return Ok(());
            }
            ChoiceInput::Valid(MenuChoice::Run(scenario)) => {
                debug!("Running scenario {:?}", scenario);
                write!(output, "{}", scenario.run(rng))?;
            }
            ChoiceInput::OutOfRange(number) => {
                debug!("Choice {} has no menu entry", number);
                writeln!(output, "{}", INVALID_CHOICE)?;
            }
            ChoiceInput::Unparseable(text) => {
                warn!("Rejected non-numeric menu input {:?}", text);
                writeln!(output, "{}", INVALID_INPUT)?;
            }
        }

        writeln!(output, "{}", CONTINUE_PROMPT)?;
        output.flush().context("Failed to flush output")?;

        if !keys.wait_for_key(input)? {
            info!("No key available to continue, leaving");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(
            parse_choice("1\n"),
            ChoiceInput::Valid(MenuChoice::Run(Scenario::Flow))
        );
        assert_eq!(
            parse_choice("2"),
            ChoiceInput::Valid(MenuChoice::Run(Scenario::Optimize))
        );
        assert_eq!(
            parse_choice(" 3 "),
            ChoiceInput::Valid(MenuChoice::Run(Scenario::Congestion))
        );
        assert_eq!(
            parse_choice("4\r\n"),
            ChoiceInput::Valid(MenuChoice::Run(Scenario::Signal))
        );
        assert_eq!(parse_choice("5"), ChoiceInput::Valid(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_choice("0"), ChoiceInput::OutOfRange(0));
        assert_eq!(parse_choice("6"), ChoiceInput::OutOfRange(6));
        assert_eq!(parse_choice("-3"), ChoiceInput::OutOfRange(-3));
    }

    #[test]
    fn test_parse_unparseable() {
        assert_eq!(
            parse_choice("abc\n"),
            ChoiceInput::Unparseable("abc".to_string())
        );
        assert_eq!(parse_choice(""), ChoiceInput::Unparseable(String::new()));
        assert_eq!(
            parse_choice("2.5"),
            ChoiceInput::Unparseable("2.5".to_string())
        );
        assert_eq!(parse_choice("+"), ChoiceInput::Unparseable("+".to_string()));
    }

    #[test]
    fn test_parse_overflowing_integer_is_out_of_range() {
        assert_eq!(
            parse_choice("99999999999999999999"),
            ChoiceInput::OutOfRange(i64::MAX)
        );
        assert_eq!(
            parse_choice("-99999999999999999999\n"),
            ChoiceInput::OutOfRange(i64::MIN)
        );
    }

    #[test]
    fn test_write_menu_lists_options() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Monte Carlo Simulation for Traffic Flow\n"));
        assert!(text.contains("1. Simulate Traffic Flow\n"));
        assert!(text.contains("4. Optimize Signal Timing\n"));
        assert!(text.contains("5. Exit\n"));
        assert!(text.ends_with(PROMPT));
    }
}
