use std::str::FromStr;

use thiserror::Error;

/// Menu selections understood by the lending desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Borrow,
    Return,
    Exit,
}

/// Malformed menu selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Error: Please enter a valid number.")]
    NotANumber(String),

    #[error("Bad choice try again")]
    OutOfRange(i64),
}

/// Parses one menu line.
///
/// The whole line, with surrounding whitespace trimmed, must be a decimal
/// integer between 1 and 4. Anything after the number (as in `3 Dune`) makes
/// the line a non-number; the title is always read from its own line.
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let choice: i64 = input
            .parse()
            .map_err(|_| CommandError::NotANumber(input.to_string()))?;

        match choice {
            1 => Ok(Self::List),
            2 => Ok(Self::Borrow),
            3 => Ok(Self::Return),
            4 => Ok(Self::Exit),
            other => Err(CommandError::OutOfRange(other)),
        }
    }
}
