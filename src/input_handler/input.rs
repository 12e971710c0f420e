//! Move input parsing and validation.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Position;

static MOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([A-Ha-h][1-8])$").expect("MOVE_RE regex should be valid"));
static EXIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)(q|quit|exit)$").expect("EXIT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Place { position: Position },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if EXIT_RE.is_match(trimmed) {
            return Err(InputError::UserExit);
        }

        MOVE_RE
            .captures(trimmed)
            .and_then(|caps| Position::from_notation(&caps[1]))
            .map(|position| MoveInput::Place { position })
            .ok_or_else(|| InputError::InvalidInput {
                input: input.to_string(),
            })
    }
}

/// Reads one line from stdin and parses it as a move token such as `E5`.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read input: {}", e),
        })?;

    // end of input
    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_tokens() {
        assert_eq!(
            MoveInput::Place {
                position: Position::new(4, 4)
            },
            "E5".parse::<MoveInput>().unwrap()
        );
        assert_eq!(
            MoveInput::Place {
                position: Position::new(0, 7)
            },
            " a8\n".parse::<MoveInput>().unwrap()
        );
    }

    #[test]
    fn test_reject_malformed_tokens() {
        for input in ["", "E", "E0", "E9", "I5", "5E", "E55", "move E5"] {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_exit_commands() {
        for input in ["q", "quit", "EXIT"] {
            assert!(matches!(
                input.parse::<MoveInput>(),
                Err(InputError::UserExit)
            ));
        }
    }
}
