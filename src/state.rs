//! Authoritative game state: the grid, the player to move, and captures.
//!
//! Equality and hashing are structural over board size, color to play and
//! grid contents. Capture counters do not take part, so two states reached
//! by different capture histories still compare equal.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::board::{Board, Cell, Color, Point};
use crate::error::{GoError, MoveError};

/// Stones captured, indexed by the color that captured them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn get(&self, capturer: Color) -> u32 {
        match capturer {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, capturer: Color, count: u32) {
        match capturer {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

/// Deep copy of the grid, taken before a move attempt.
#[derive(Debug, Clone)]
pub struct Snapshot(Board);

/// Grid plus color to play. Stored in the move history for repetition checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    board: Board,
    to_play: Color,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    to_play: Color,
    captures: Captures,
}

impl GameState {
    /// Fresh game on an empty board with Black to play.
    pub fn new(size: usize) -> Result<Self, GoError> {
        Ok(Self {
            board: Board::new(size)?,
            to_play: Color::Black,
            captures: Captures::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn to_play(&self) -> Color {
        self.to_play
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Put a stone of the color to play on `point`. Does not advance the turn.
    pub fn place_stone(&mut self, point: Point) -> Result<(), MoveError> {
        match self.board.get(point) {
            None => Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => {
                self.board.set(point, self.to_play.into());
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied),
        }
    }

    pub fn remove_stone(&mut self, point: Point) -> Result<(), MoveError> {
        match self.board.get(point) {
            None => Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => Err(MoveError::Vacant),
            Some(_) => {
                self.board.set(point, Cell::Empty);
                Ok(())
            }
        }
    }

    /// Remove every stone in `points`, stopping at the first failure.
    pub fn remove_stones<'a>(
        &mut self,
        points: impl IntoIterator<Item = &'a Point>,
    ) -> Result<(), MoveError> {
        for &pt in points {
            self.remove_stone(pt)?;
        }
        Ok(())
    }

    /// Hand the move to the other color.
    pub fn next_color_to_play(&mut self) {
        self.to_play = self.to_play.opp();
    }

    pub(crate) fn credit_captures(&mut self, capturer: Color, count: u32) {
        self.captures.add(capturer, count);
    }

    /// Copy of the grid only. Captures and color to play are not included.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.board.clone())
    }

    /// Put back a grid taken with [`GameState::snapshot`].
    pub fn restore(&mut self, snapshot: Snapshot) {
        debug_assert_eq!(snapshot.0.size(), self.board.size());
        self.board = snapshot.0;
    }

    pub fn key(&self) -> PositionKey {
        PositionKey {
            board: self.board.clone(),
            to_play: self.to_play,
        }
    }

    /// Structural hash over size, color to play and grid contents.
    pub fn position_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.to_play == other.to_play && self.board == other.board
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.to_play.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(13).unwrap();
        assert_eq!(state.size(), 13);
        assert_eq!(state.to_play(), Color::Black);
        assert_eq!(state.captures(), Captures::default());
        assert!(GameState::new(15).is_err());
    }

    #[test]
    fn test_place_stone_uses_color_to_play() {
        let mut state = GameState::new(9).unwrap();
        state.place_stone((2, 3)).unwrap();
        assert_eq!(state.board().get((2, 3)), Some(Cell::Black));
        assert_eq!(state.to_play(), Color::Black, "placing does not advance the turn");

        state.next_color_to_play();
        state.place_stone((2, 4)).unwrap();
        assert_eq!(state.board().get((2, 4)), Some(Cell::White));
    }

    #[test]
    fn test_place_stone_errors() {
        let mut state = GameState::new(9).unwrap();
        assert_eq!(state.place_stone((9, 0)), Err(MoveError::OutOfBounds));
        state.place_stone((0, 0)).unwrap();
        assert_eq!(state.place_stone((0, 0)), Err(MoveError::Occupied));
    }

    #[test]
    fn test_remove_stone_errors() {
        let mut state = GameState::new(9).unwrap();
        assert_eq!(state.remove_stone((0, 9)), Err(MoveError::OutOfBounds));
        assert_eq!(state.remove_stone((0, 0)), Err(MoveError::Vacant));
        state.place_stone((0, 0)).unwrap();
        assert_eq!(state.remove_stone((0, 0)), Ok(()));
        assert_eq!(state.board().get((0, 0)), Some(Cell::Empty));
    }

    #[test]
    fn test_remove_stones() {
        let mut state = GameState::new(9).unwrap();
        let points = [(1, 1), (1, 2), (2, 2)];
        for pt in &points {
            state.place_stone(*pt).unwrap();
        }
        state.remove_stones(&points).unwrap();
        assert_eq!(state.board().count(Cell::Empty), 81);
    }

    #[test]
    fn test_snapshot_restore_grid_only() {
        let mut state = GameState::new(9).unwrap();
        state.place_stone((4, 4)).unwrap();
        let snapshot = state.snapshot();

        state.place_stone((4, 5)).unwrap();
        state.next_color_to_play();
        state.credit_captures(Color::Black, 3);
        state.restore(snapshot);

        assert_eq!(state.board().get((4, 4)), Some(Cell::Black));
        assert_eq!(state.board().get((4, 5)), Some(Cell::Empty));
        assert_eq!(state.to_play(), Color::White);
        assert_eq!(state.captures().get(Color::Black), 3);
    }

    #[test]
    fn test_equality_ignores_captures() {
        let mut a = GameState::new(9).unwrap();
        let mut b = GameState::new(9).unwrap();
        a.place_stone((3, 3)).unwrap();
        b.place_stone((3, 3)).unwrap();
        b.credit_captures(Color::White, 2);
        assert_eq!(a, b);
        assert_eq!(a.position_hash(), b.position_hash());
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_equality_depends_on_color_to_play() {
        let a = GameState::new(9).unwrap();
        let mut b = GameState::new(9).unwrap();
        b.next_color_to_play();
        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_equality_depends_on_size() {
        let a = GameState::new(9).unwrap();
        let b = GameState::new(13).unwrap();
        assert_ne!(a, b);
    }
}
