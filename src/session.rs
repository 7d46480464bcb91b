//! Interactive terminal game loop.
//!
//! Reads one command per line, applies it to the [`Game`], and writes a
//! fresh frame after every move attempt. Rejected moves print the reason
//! and the loop carries on; only `exit`, end of input, or two consecutive
//! passes stop it.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use goterm::game::Game;
//! use goterm::session::Session;
//!
//! let input = Cursor::new("e5\npass\npass\n");
//! let mut session = Session::new(Game::new(9).unwrap(), input, Vec::new());
//! let score = session.run().unwrap().expect("game finished");
//! assert_eq!(score.black, 80);
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::constants::COLUMN_LETTERS;
use crate::coord::{Command, parse_command, parse_coord};
use crate::game::{Game, PassOutcome};
use crate::score::Score;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
    Finished(Score),
}

pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self { game, input, output }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until exit, end of input or game over.
    ///
    /// Returns the final score when the game ended by two passes.
    pub fn run(&mut self) -> Result<Option<Score>> {
        self.render()?;
        let prompt = self.prompt();
        let mut line = String::new();

        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush().context("failed to flush output")?;

            line.clear();
            if self.input.read_line(&mut line).context("failed to read input")? == 0 {
                debug!("end of input");
                return Ok(None);
            }
            let Some(command) = parse_command(&line) else {
                continue;
            };

            match self.execute(command)? {
                Step::Continue => {}
                Step::Exit => return Ok(None),
                Step::Finished(score) => return Ok(Some(score)),
            }
        }
    }

    fn prompt(&self) -> String {
        let size = self.game.size();
        format!(
            "Enter a combination of a letter (A-{}) and a number (1-{size}) or \"pass\": ",
            COLUMN_LETTERS[size - 1] as char
        )
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.game.frame()).context("failed to write board")
    }

    fn execute(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Exit => Ok(Step::Exit),
            Command::Pass => match self.game.pass() {
                Ok(PassOutcome::Passed) => {
                    self.render()?;
                    Ok(Step::Continue)
                }
                Ok(PassOutcome::GameOver(score)) => {
                    self.render()?;
                    writeln!(self.output, "{score}")?;
                    Ok(Step::Finished(score))
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    Ok(Step::Continue)
                }
            },
            Command::Play(raw) => {
                self.game.reset_pass_streak();
                let result = parse_coord(&raw, self.game.size()).and_then(|pt| self.game.play(pt));
                self.render()?;
                if let Err(err) = result {
                    writeln!(self.output, "{err}. Play somewhere else.")?;
                }
                Ok(Step::Continue)
            }
        }
    }
}
