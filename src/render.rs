//! Text rendering of the board and the heads-up display.
//!
//! [`Frame`] is a plain snapshot of everything a renderer needs. Its
//! `Display` impl draws the board with box-drawing characters; no colors or
//! cursor control, so the output is safe for any terminal or a log file.

use std::fmt;

use crate::board::{Cell, Color, Point};
use crate::constants::{COLUMN_LETTERS, GLYPH_BLACK, GLYPH_STAR, GLYPH_WHITE, star_points};
use crate::state::{Captures, GameState};

/// Read-only render model taken after each move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub size: usize,
    /// Rows top to bottom
    pub cells: Vec<Vec<Cell>>,
    pub to_play: Color,
    pub captures: Captures,
    pub komi: u32,
}

impl Frame {
    pub fn new(state: &GameState, komi: u32) -> Self {
        Self {
            size: state.size(),
            cells: state.board().rows().map(<[Cell]>::to_vec).collect(),
            to_play: state.to_play(),
            captures: state.captures(),
            komi,
        }
    }

    /// Glyph for an empty intersection: corner, edge, star point or cross.
    fn grid_glyph(&self, (row, col): Point, stars: &[Point]) -> char {
        let last = self.size - 1;
        match (row, col) {
            (0, 0) => '┌',
            (0, c) if c == last => '┐',
            (r, 0) if r == last => '└',
            (r, c) if r == last && c == last => '┘',
            (0, _) => '┬',
            (r, _) if r == last => '┴',
            (_, 0) => '├',
            (_, c) if c == last => '┤',
            p if stars.contains(&p) => GLYPH_STAR,
            _ => '┼',
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("Go {0}×{0} (Komi: {1})", self.size, self.komi);
        writeln!(f, "{title:<20}Captured:")?;
        writeln!(f, "{:20} {GLYPH_BLACK} : {:2}", "", self.captures.black)?;
        let glyph = match self.to_play {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        };
        writeln!(
            f,
            "{:<20} {GLYPH_WHITE} : {:2}",
            format!("{} {glyph} to play.", self.to_play),
            self.captures.white
        )?;
        writeln!(f)?;

        let letters: String = COLUMN_LETTERS[..self.size].iter().map(|&b| b as char).collect();
        writeln!(f, "    {letters}")?;

        let stars = star_points(self.size);
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:>3} ", self.size - r)?;
            for (c, cell) in row.iter().enumerate() {
                let ch = match cell {
                    Cell::Black => GLYPH_BLACK,
                    Cell::White => GLYPH_WHITE,
                    Cell::Empty => self.grid_glyph((r, c), &stars),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_reflects_state() {
        let mut state = GameState::new(9).unwrap();
        state.place_stone((8, 0)).unwrap();
        state.next_color_to_play();
        let frame = Frame::new(&state, 7);

        assert_eq!(frame.size, 9);
        assert_eq!(frame.cells.len(), 9);
        assert_eq!(frame.cells[8][0], Cell::Black);
        assert_eq!(frame.to_play, Color::White);
        assert_eq!(frame.komi, 7);
    }

    #[test]
    fn test_display_empty_9x9() {
        let state = GameState::new(9).unwrap();
        let text = Frame::new(&state, 7).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Go 9×9 (Komi: 7)"));
        assert!(lines[2].starts_with("Black ● to play."));
        assert_eq!(lines[4], "    ABCDEFGHI");
        assert_eq!(lines[5], "  9 ┌┬┬┬┬┬┬┬┐");
        assert_eq!(lines[7], "  7 ├┼┿┼┼┼┿┼┤");
        assert_eq!(lines[9], "  5 ├┼┼┼┿┼┼┼┤");
        assert_eq!(lines[13], "  1 └┴┴┴┴┴┴┴┘");
    }

    #[test]
    fn test_display_stones() {
        let mut state = GameState::new(9).unwrap();
        state.place_stone((8, 0)).unwrap();
        state.next_color_to_play();
        state.place_stone((0, 8)).unwrap();
        let text = Frame::new(&state, 7).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[5], "  9 ┌┬┬┬┬┬┬┬○");
        assert_eq!(lines[13], "  1 ●┴┴┴┴┴┴┴┘");
    }

    #[test]
    fn test_display_19x19_labels() {
        let state = GameState::new(19).unwrap();
        let text = Frame::new(&state, 7).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "    ABCDEFGHIJKLMNOPQRS");
        assert!(lines[5].starts_with(" 19 ┌"));
        // Row 10 from the bottom holds the centre and two side star points
        assert_eq!(lines[5 + 9].matches(GLYPH_STAR).count(), 3);
    }
}
