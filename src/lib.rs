//! Goterm: the board game Go in the terminal.
//!
//! Two players share one terminal on a 9x9, 13x13 or 19x19 board. Moves are
//! checked for occupancy, self-capture and repetition of an earlier
//! position; surrounded groups are captured; the game ends after two
//! consecutive passes and is scored by area with a fixed komi.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, komi and display glyphs
//! - [`error`] - Configuration and move errors
//! - [`board`] - Cell values and the square grid
//! - [`flood`] - Connected-component search over the grid
//! - [`group`] - Groups, enemy neighbors and capture checks
//! - [`state`] - Game state with snapshot/restore and structural hashing
//! - [`game`] - Move engine: captures, legality and pass handling
//! - [`score`] - Area scoring
//! - [`coord`] - Input commands and coordinate parsing
//! - [`render`] - Text frame for the board and heads-up display
//! - [`menu`] - Board-size selection
//! - [`session`] - Terminal game loop
//!
//! ## Example
//!
//! ```
//! use goterm::coord::parse_coord;
//! use goterm::game::Game;
//!
//! let mut game = Game::new(9).unwrap();
//! game.play(parse_coord("A1", 9).unwrap()).unwrap();
//! game.play(parse_coord("B1", 9).unwrap()).unwrap();
//! game.play(parse_coord("E5", 9).unwrap()).unwrap();
//!
//! // White fills A1's last liberty and takes the stone
//! let captured = game.play(parse_coord("A2", 9).unwrap()).unwrap();
//! assert_eq!(captured, 1);
//! println!("{}", game.frame());
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod flood;
pub mod game;
pub mod group;
pub mod menu;
pub mod render;
pub mod score;
pub mod session;
pub mod state;
