//! Board-size selection menu shown when no size is given on the command line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::constants::DEFAULT_SIZE;

const MENU: &str = "
       Welcome to the game of Go!

     Select a board size to play on:

          a) 19×19 (default)
          b) 13×13
          c)   9×9

          d) Exit
";

/// Show the menu and read choices until one is valid.
///
/// Returns the chosen size, or `None` for exit or end of input. An empty
/// line picks the default size.
pub fn select_board_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<usize>> {
    writeln!(output, "{MENU}").context("failed to write menu")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("failed to read menu choice")? == 0 {
            return Ok(None);
        }
        let choice = match line.trim().to_ascii_lowercase().as_str() {
            "" | "a" => Some(DEFAULT_SIZE),
            "b" => Some(13),
            "c" => Some(9),
            "d" => return Ok(None),
            other => {
                debug!(choice = other, "ignoring menu choice");
                None
            }
        };
        if let Some(size) = choice {
            return Ok(Some(size));
        }
    }
}
