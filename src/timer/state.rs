//! Countdown state management
//!
//! Contains the `CountdownState` struct that tracks the remaining time and
//! run phase, as well as the shared types the state machine works with.

use std::time::Duration;

use chrono::TimeDelta;

/// Seconds counted off per tick.
pub const TICK_SECONDS: i64 = 1;

/// Interval between ticks while running.
pub const TICK: Duration = Duration::from_secs(TICK_SECONDS as u64);

/// An input the countdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Stop the countdown and exit
    Quit,
    /// Reset to the starting duration and run
    Restart,
    /// Pause when running, resume otherwise
    TogglePause,
    /// Terminal size changed; redraw
    Resize,
    /// Anything without a binding
    Other,
}

/// Something that drives the state machine forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// An input from the terminal
    Input(InputEvent),
    /// The one-second ticker fired
    Tick,
    /// The deadline alarm fired
    Deadline,
}

/// Result of handling one trigger.
///
/// Signals control flow decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Keep waiting for the next trigger
    Continue,
    /// Exit the countdown
    Quit,
}

/// Where the countdown currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Alarms armed, ticking down
    Running,
    /// Alarms disarmed by the user
    Paused,
    /// Deadline reached; waiting for restart or quit
    Expired,
}

/// Time bookkeeping for one countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    /// Time left; may reach zero or go negative
    pub remaining: TimeDelta,
    /// Value used by restart
    pub started: TimeDelta,
    /// Current phase
    pub phase: Phase,
}

impl CountdownState {
    /// Create a running state for `duration`.
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            remaining: duration,
            started: duration,
            phase: Phase::Running,
        }
    }

    /// True unless running; no alarms are armed and no time elapses.
    pub fn is_paused(&self) -> bool {
        self.phase != Phase::Running
    }

    /// True once the remaining time is zero or below.
    pub fn is_expired(&self) -> bool {
        self.remaining <= TimeDelta::zero()
    }

    /// Count one tick off the remaining time.
    pub fn tick(&mut self) {
        self.remaining = self.remaining - TimeDelta::seconds(TICK_SECONDS);
    }

    /// Back to the starting value, running.
    pub fn restart(&mut self) {
        self.remaining = self.started;
        self.phase = Phase::Running;
    }

    /// Flip between running and stopped.
    ///
    /// Resuming from `Expired` works like resuming from `Paused`.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused | Phase::Expired => Phase::Running,
        };
    }

    /// The deadline fired.
    ///
    /// The deadline wins over the ticker: a final tick that is late or
    /// still pending would leave time on the clock, so any positive
    /// remainder is dropped. Values already at or below zero are kept.
    pub fn expire(&mut self) {
        if self.remaining > TimeDelta::zero() {
            self.remaining = TimeDelta::zero();
        }
        self.phase = Phase::Expired;
    }
}
