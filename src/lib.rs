//! countdown - a terminal countdown timer
//!
//! Shows the time left as a large digital clock centered in the terminal
//! and counts down once per second. `p` pauses, `r` restarts, `Esc` or
//! `Ctrl-C` quits. The display turns red at zero and stays interactive.

pub mod cli;
pub mod duration;
pub mod logging;
pub mod screen;
pub mod timer;

pub use cli::Cli;
pub use duration::{parse_duration, DurationError};
pub use timer::{Countdown, SystemClock};
