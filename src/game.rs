//! Move engine: validates, executes and records moves.
//!
//! A move attempt runs to completion before the next one starts:
//!
//! 1. snapshot the grid
//! 2. place the stone (off-board and occupied points are rejected here)
//! 3. remove every adjacent enemy group left without liberties
//! 4. reject self-capture
//! 5. advance the turn
//! 6. reject a position (grid + color to play) seen earlier in the game
//! 7. credit captures to the mover and record the position
//!
//! Any rejection puts the grid back from the snapshot and discards the
//! capture tally. A repeated-position rejection leaves the turn advanced, so
//! the player who tried it loses the move.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::board::Point;
use crate::constants::{KOMI, PASSES_TO_END};
use crate::coord::str_coord;
use crate::error::{GoError, MoveError};
use crate::group::{adjacent_enemy_groups, is_captured, is_captured_at};
use crate::render::Frame;
use crate::score::{Score, score};
use crate::state::{GameState, PositionKey};

/// Result of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Turn handed over; the game continues
    Passed,
    /// Second consecutive pass; the game is over
    GameOver(Score),
}

pub struct Game {
    state: GameState,
    /// Every committed position, for repetition checks
    history: HashSet<PositionKey>,
    passes: u8,
    over: bool,
}

impl Game {
    pub fn new(size: usize) -> Result<Self, GoError> {
        let state = GameState::new(size)?;
        info!(size, komi = KOMI, "new game");
        Ok(Self {
            state,
            history: HashSet::new(),
            passes: 0,
            over: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn size(&self) -> usize {
        self.state.size()
    }

    pub fn komi(&self) -> u32 {
        KOMI
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Number of committed positions recorded so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Read-only view for the renderer.
    pub fn frame(&self) -> Frame {
        Frame::new(&self.state, self.komi())
    }

    pub fn score(&self) -> Score {
        score(&self.state)
    }

    /// Forget any pending pass. Every move attempt does this, including input
    /// that never becomes a point on the board.
    pub fn reset_pass_streak(&mut self) {
        self.passes = 0;
    }

    /// Play a stone for the color to move.
    ///
    /// Returns the number of enemy stones captured by the move.
    pub fn play(&mut self, point: Point) -> Result<u32, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        self.reset_pass_streak();

        let mover = self.state.to_play();
        let snapshot = self.state.snapshot();
        match self.try_play(point) {
            Ok((captured, key)) => {
                self.state.credit_captures(mover, captured);
                self.history.insert(key);
                debug!(
                    color = %mover,
                    at = %str_coord(point, self.size()),
                    captured,
                    "move committed"
                );
                Ok(captured)
            }
            Err(err) => {
                self.state.restore(snapshot);
                debug!(color = %mover, ?point, %err, "move rejected");
                Err(err)
            }
        }
    }

    fn try_play(&mut self, point: Point) -> Result<(u32, PositionKey), MoveError> {
        let mover = self.state.to_play();
        self.state.place_stone(point)?;

        let mut captured = 0u32;
        for group in adjacent_enemy_groups(self.state.board(), point, mover) {
            if is_captured(self.state.board(), &group) {
                self.state.remove_stones(&group)?;
                captured += group.len() as u32;
            }
        }

        if is_captured_at(self.state.board(), point) {
            return Err(MoveError::SelfCapture);
        }

        self.state.next_color_to_play();

        let key = self.state.key();
        if self.history.contains(&key) {
            return Err(MoveError::RepeatedPosition);
        }
        Ok((captured, key))
    }

    /// Pass the turn. Two passes in a row end the game.
    pub fn pass(&mut self) -> Result<PassOutcome, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        let passer = self.state.to_play();
        self.state.next_color_to_play();
        self.passes += 1;
        info!(color = %passer, "pass");

        if self.passes >= PASSES_TO_END {
            self.over = true;
            let final_score = self.score();
            info!(
                black = final_score.black,
                white = final_score.white,
                winner = %final_score.winner(),
                "game over"
            );
            return Ok(PassOutcome::GameOver(final_score));
        }
        Ok(PassOutcome::Passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Color};

    fn play_all(game: &mut Game, moves: &[Point]) {
        for &pt in moves {
            game.play(pt)
                .unwrap_or_else(|e| panic!("move {pt:?} rejected: {e}"));
        }
    }

    #[test]
    fn test_new_game_bad_size() {
        assert!(matches!(
            Game::new(10),
            Err(GoError::InvalidConfiguration { size: 10 })
        ));
    }

    #[test]
    fn test_play_alternates_colors() {
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(4, 4), (4, 5)]);
        assert_eq!(game.state().board().get((4, 4)), Some(Cell::Black));
        assert_eq!(game.state().board().get((4, 5)), Some(Cell::White));
        assert_eq!(game.state().to_play(), Color::Black);
        assert_eq!(game.history_len(), 2);
    }

    #[test]
    fn test_out_of_bounds_and_occupied_keep_turn() {
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(0, 0)]);
        assert_eq!(game.play((9, 9)), Err(MoveError::OutOfBounds));
        assert_eq!(game.play((0, 0)), Err(MoveError::Occupied));
        assert_eq!(game.state().to_play(), Color::White);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_corner_capture_credits_capturer() {
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(0, 0), (0, 1), (8, 8)]);
        assert_eq!(game.play((1, 0)), Ok(1));
        assert_eq!(game.state().board().get((0, 0)), Some(Cell::Empty));
        assert_eq!(game.state().captures().get(Color::White), 1);
        assert_eq!(game.state().captures().get(Color::Black), 0);
    }

    #[test]
    fn test_capture_before_self_capture_check() {
        // Black's stone at (0,0) has no liberty until the white stone at
        // (0,1) is taken off.
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(0, 2), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(game.play((0, 0)), Ok(1));
        assert_eq!(game.state().board().get((0, 1)), Some(Cell::Empty));
        assert_eq!(game.state().board().get((1, 0)), Some(Cell::White));
        assert_eq!(game.state().board().get((0, 0)), Some(Cell::Black));
    }

    #[test]
    fn test_self_capture_rejected() {
        let mut game = Game::new(9).unwrap();
        play_all(&mut game, &[(0, 1), (8, 8), (1, 0)]);
        let before = game.state().board().clone();
        assert_eq!(game.play((0, 0)), Err(MoveError::SelfCapture));
        assert_eq!(game.state().board(), &before);
        assert_eq!(game.state().to_play(), Color::White);
    }

    #[test]
    fn test_pass_streak() {
        let mut game = Game::new(9).unwrap();
        assert_eq!(game.pass(), Ok(PassOutcome::Passed));
        assert_eq!(game.state().to_play(), Color::White);
        play_all(&mut game, &[(3, 3)]);
        assert_eq!(game.pass(), Ok(PassOutcome::Passed));
        assert!(!game.is_over());
        let outcome = game.pass().unwrap();
        assert!(matches!(outcome, PassOutcome::GameOver(_)));
        assert!(game.is_over());
        assert_eq!(game.play((4, 4)), Err(MoveError::GameOver));
        assert_eq!(game.pass(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_rejected_move_resets_pass_streak() {
        let mut game = Game::new(9).unwrap();
        game.pass().unwrap();
        assert_eq!(game.play((20, 0)), Err(MoveError::OutOfBounds));
        assert_eq!(game.pass(), Ok(PassOutcome::Passed));
    }
}
