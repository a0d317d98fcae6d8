//! Interactive countdown timer
//!
//! Renders the remaining time as a large clock and counts it down once per
//! second, with pause, restart and quit bound to the keyboard.
//!
//! # Architecture
//!
//! The countdown is organized into submodules:
//! - `state`: CountdownState and the shared trigger/input types
//! - `alarm`: deadline timer and one-second ticker behind a `Clock`
//! - `input/`: background input source and key bindings
//! - `machine`: the state machine and its `select!` loop
//! - `render/`: formatting, glyph layout, and painting the clock face
//!
//! # Usage
//!
//! ```no_run
//! use chrono::TimeDelta;
//! use countdown::timer::{spawn_input_source, Countdown, SystemClock};
//! use ratatui::backend::CrosstermBackend;
//! use ratatui::Terminal;
//!
//! let terminal = Terminal::new(CrosstermBackend::new(std::io::stdout())).unwrap();
//! let input = spawn_input_source(crossterm::event::read).unwrap();
//! let mut countdown = Countdown::new(terminal, SystemClock, TimeDelta::seconds(25));
//! countdown.run(input).unwrap();
//! ```

pub mod alarm;
pub mod input;
mod machine;
pub mod render;
pub mod state;

pub use alarm::{Alarms, Clock, SystemClock};
pub use input::{map_event, spawn_input_source};
pub use machine::Countdown;
pub use state::{CountdownState, InputEvent, Phase, StepResult, Trigger, TICK};
