//! Goterm: two-player Go in the terminal.
//!
//! ## Usage
//!
//! - `goterm` - Pick a board size from the menu, then play
//! - `goterm --size 9` - Play on a 9x9 board straight away
//! - `goterm --debug` - Log move decisions to stderr (`RUST_LOG` also works)

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use goterm::game::Game;
use goterm::menu::select_board_size;
use goterm::session::Session;

/// Goterm: the board game Go for two players at one terminal
#[derive(Parser)]
#[command(name = "goterm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (9, 13 or 19). Shows a menu when omitted
    #[arg(short, long)]
    size: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli.size) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let default = if debug { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(size: Option<usize>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let size = match size {
        Some(size) => size,
        None => match select_board_size(&mut input, &mut output)? {
            Some(size) => size,
            None => return Ok(()),
        },
    };
    let game = Game::new(size)?;
    Session::new(game, input, output).run()?;
    Ok(())
}
