//! Constants for board sizes, scoring, and text tokens.
//!
//! Board dimensions are chosen at runtime from [`BOARD_SIZES`]; everything
//! else here is fixed for the lifetime of the program.

// =============================================================================
// Board Geometry
// =============================================================================

/// Supported board sizes (NxN).
pub const BOARD_SIZES: [usize; 3] = [9, 13, 19];

/// Board size used when the menu selection is left at its default.
pub const DEFAULT_SIZE: usize = 19;

/// Largest supported board size. Bounds the coordinate letters and numbers.
pub const MAX_SIZE: usize = 19;

/// Column letters, left to right. No letter is skipped.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHIJKLMNOPQRS";

/// Orthogonal neighbor offsets as (row, col) deltas.
/// Order: North, South, West, East
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Scoring
// =============================================================================

/// Komi (compensation points for White). Area scoring with an integer komi,
/// so a drawn game is possible; draws go to White.
pub const KOMI: u32 = 7;

// =============================================================================
// Input Tokens
// =============================================================================

/// Pass command (compared after upper-casing the input line).
pub const PASS_TOKEN: &str = "PASS";

/// Exit command (compared after upper-casing the input line).
pub const EXIT_TOKEN: &str = "EXIT";

/// Number of consecutive passes that ends the game.
pub const PASSES_TO_END: u8 = 2;

// =============================================================================
// Display Glyphs
// =============================================================================

pub const GLYPH_BLACK: char = '●';
pub const GLYPH_WHITE: char = '○';
pub const GLYPH_STAR: char = '┿';

/// Check whether a board size is one of the supported sizes.
pub fn is_supported_size(size: usize) -> bool {
    BOARD_SIZES.contains(&size)
}

/// Star points (hoshi) for a board of the given size, as (row, col).
///
/// 9x9 uses the 3-3 points, 13x13 and 19x19 the 4-4 points. 19x19 adds the
/// four side points. Every board has the centre point.
pub fn star_points(size: usize) -> Vec<(usize, usize)> {
    let mid = size / 2;
    let near = if size == 9 { 2 } else { 3 };
    let far = size - 1 - near;
    let mut points = vec![(near, near), (near, far), (far, near), (far, far), (mid, mid)];
    if size == 19 {
        points.extend([(near, mid), (mid, near), (far, mid), (mid, far)]);
    }
    points
}
