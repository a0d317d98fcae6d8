//! countdown binary entry point.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use countdown::logging::init_file_logging;
use countdown::screen::ScreenGuard;
use countdown::timer::{spawn_input_source, Countdown, SystemClock};
use countdown::Cli;

/// Exit status after the user quits.
const EXIT_QUIT: i32 = 1;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    // Usage and duration errors exit with status 2 from here
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path, cli.log_level)?;
    }

    let (guard, terminal) = ScreenGuard::enter().context("failed to initialise terminal")?;
    let input = spawn_input_source(crossterm::event::read)
        .context("failed to start input thread")?;

    let mut countdown = Countdown::new(terminal, SystemClock, cli.duration);
    countdown.run(input)?;

    // process::exit skips destructors
    drop(countdown);
    guard.restore();
    process::exit(EXIT_QUIT);
}
