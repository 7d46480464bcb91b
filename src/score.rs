//! End-of-game area scoring.
//!
//! Each maximal empty region is credited to a color when every stone
//! bordering it has that color. Regions touching both colors, or no stone at
//! all, count for nobody. Captures are added to the capturer's total and komi
//! to White's.

use std::fmt;

use crate::board::{Board, Cell, Color};
use crate::constants::KOMI;
use crate::flood::{Group, flood_fill};
use crate::state::GameState;

/// Final totals, including komi and captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Winning color. White takes a tie.
    pub fn winner(&self) -> Color {
        if self.black > self.white {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GAME OVER!")?;
        writeln!(f, "  Black: {:3}", self.black)?;
        writeln!(f, "  White: {:3}", self.white)?;
        if self.black == self.white {
            writeln!(f, "Draws are awarded to White.")?;
        }
        write!(f, "{} wins.", self.winner())
    }
}

/// Score a finished game with the fixed komi.
pub fn score(state: &GameState) -> Score {
    score_with_komi(state, KOMI)
}

pub(crate) fn score_with_komi(state: &GameState, komi: u32) -> Score {
    let board = state.board();
    let captures = state.captures();
    let mut total = Score {
        black: captures.black,
        white: komi + captures.white,
    };

    for region in empty_regions(board) {
        match region_owner(board, &region) {
            Some(Color::Black) => total.black += region.len() as u32,
            Some(Color::White) => total.white += region.len() as u32,
            None => {}
        }
    }
    total
}

/// Partition the empty points of `board` into maximal connected regions.
pub fn empty_regions(board: &Board) -> Vec<Group> {
    let mut seen = vec![false; board.size() * board.size()];
    let mut regions = Vec::new();

    for pt in board.points() {
        if seen[pt.0 * board.size() + pt.1] || board.get(pt) != Some(Cell::Empty) {
            continue;
        }
        let region = flood_fill(board, pt, Cell::Empty);
        for &(r, c) in &region {
            seen[r * board.size() + c] = true;
        }
        regions.push(region);
    }
    regions
}

/// The single color bordering `region`, if there is exactly one.
fn region_owner(board: &Board, region: &Group) -> Option<Color> {
    let mut owner = None;
    for &pt in region {
        for n in board.neighbors(pt) {
            let Some(color) = board.get(n).and_then(Cell::color) else {
                continue;
            };
            match owner {
                None => owner = Some(color),
                Some(c) if c != color => return None,
                Some(_) => {}
            }
        }
    }
    owner
}
