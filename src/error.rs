//! Error types for board construction and move validation.

use thiserror::Error;

/// Reason a move (or a direct board edit) was rejected.
///
/// Every variant is recoverable: the board is rolled back and play continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Point lies outside the board
    #[error("Illegal move: point is off the board")]
    OutOfBounds,
    /// Point already holds a stone
    #[error("Illegal move: point is already taken")]
    Occupied,
    /// Tried to remove a stone from an empty point
    #[error("Illegal move: no stone at that point")]
    Vacant,
    /// Move would leave the new stone's group without liberties
    #[error("Illegal move: self-capture")]
    SelfCapture,
    /// Move recreates an earlier position with the same player to move
    #[error("Illegal move: repeats an earlier board position")]
    RepeatedPosition,
    /// Input could not be read as a coordinate
    #[error("Illegal move: malformed coordinate {0:?}")]
    MalformedCoordinate(String),
    /// Two consecutive passes already ended the game
    #[error("Illegal move: the game is over")]
    GameOver,
}

/// Top-level error for the game library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoError {
    /// Board size is not one of 9, 13 or 19
    #[error("invalid configuration: board size must be 9, 13 or 19 (got {size})")]
    InvalidConfiguration { size: usize },
    #[error(transparent)]
    InvalidMove(#[from] MoveError),
}
