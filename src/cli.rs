//! Command-line interface definition.
//!
//! Kept in the library so the xtask can generate the man page from it.

use std::path::PathBuf;

use chrono::TimeDelta;
use clap::Parser;
use tracing::Level;

use crate::duration::parse_duration;

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("COUNTDOWN_BUILD_DATE"),
    ")"
);

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("COUNTDOWN_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "\
Examples:
  countdown 25s
  countdown 1m50s
  countdown 2h45m50s

Keys:
  p          pause / resume
  r          restart from the initial duration
  Esc, C-c   quit";

/// Terminal countdown timer rendered as a large digital clock.
#[derive(Debug, Parser)]
#[command(name = "countdown", version, long_version = LONG_VERSION, after_help = EXAMPLES)]
pub struct Cli {
    /// How long to count down, e.g. 25s, 1m50s, 2h45m50s
    #[arg(value_name = "DURATION", value_parser = parse_duration, allow_hyphen_values = true)]
    pub duration: TimeDelta,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum level written to the log file
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: Level,
}
