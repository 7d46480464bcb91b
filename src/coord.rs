//! Player input: commands and board coordinates.
//!
//! Coordinates are one letter `A`-`S` (column, left to right) and one
//! number `1`-`19` (row, counted from the bottom), in either order and in
//! any case: `D4`, `4d` and ` d4 ` all name the same point. Numbers are
//! written without leading zeros, so `D04` is malformed.

use crate::board::Point;
use crate::constants::{COLUMN_LETTERS, EXIT_TOKEN, MAX_SIZE, PASS_TOKEN};
use crate::error::MoveError;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pass,
    Exit,
    /// Upper-cased, trimmed text to be parsed as a coordinate
    Play(String),
}

/// Classify a line of input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let text = line.trim().to_ascii_uppercase();
    match text.as_str() {
        "" => None,
        PASS_TOKEN => Some(Command::Pass),
        EXIT_TOKEN => Some(Command::Exit),
        _ => Some(Command::Play(text)),
    }
}

/// Parse a coordinate string into a (row, col) point on a `size` board.
///
/// # Errors
/// - `MalformedCoordinate` - not exactly one letter A-S and one number 1-19
/// - `OutOfBounds` - well formed, but past the edge of a smaller board
pub fn parse_coord(raw: &str, size: usize) -> Result<Point, MoveError> {
    let malformed = || MoveError::MalformedCoordinate(raw.trim().to_string());
    let text = raw.trim().to_ascii_uppercase();
    let bytes = text.as_bytes();

    let letter_at = if bytes.first().is_some_and(u8::is_ascii_alphabetic) {
        0
    } else {
        bytes.len().checked_sub(1).ok_or_else(malformed)?
    };
    let col = COLUMN_LETTERS
        .iter()
        .position(|&c| c == bytes[letter_at])
        .ok_or_else(malformed)?;
    let digits = if letter_at == 0 { &text[1..] } else { &text[..letter_at] };
    if digits.is_empty()
        || digits.len() > 2
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }
    let number: usize = digits.parse().map_err(|_| malformed())?;
    if !(1..=MAX_SIZE).contains(&number) {
        return Err(malformed());
    }

    if col >= size || number > size {
        return Err(MoveError::OutOfBounds);
    }
    Ok((size - number, col))
}

/// Convert a point back to its coordinate string (e.g. "D4").
pub fn str_coord((row, col): Point, size: usize) -> String {
    match COLUMN_LETTERS.get(col) {
        Some(&letter) if row < size => format!("{}{}", letter as char, size - row),
        _ => format!("({row},{col})"),
    }
}
