//! Timer and ticker alarms.
//!
//! Alarms are channels that deliver an `Instant` when they fire, so the
//! main loop can wait on them next to the input channel with
//! `crossbeam_channel::select!`. A [`Clock`] creates them; tests swap in a
//! clock whose alarms fire on command.

use std::time::{Duration, Instant};

use chrono::TimeDelta;
use crossbeam_channel::{never, Receiver};

use super::state::TICK;

/// Source of alarm channels.
pub trait Clock {
    /// Repeating alarm firing every `period`.
    fn ticker(&self, period: Duration) -> Receiver<Instant>;

    /// One-shot alarm firing once after `delay`.
    fn timer(&self, delay: Duration) -> Receiver<Instant>;
}

/// Wall-clock alarms backed by crossbeam's timer channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn ticker(&self, period: Duration) -> Receiver<Instant> {
        crossbeam_channel::tick(period)
    }

    fn timer(&self, delay: Duration) -> Receiver<Instant> {
        crossbeam_channel::after(delay)
    }
}

/// The countdown's deadline timer and one-second ticker.
///
/// Disarmed alarms are `never()` channels, which are never ready.
pub struct Alarms<C> {
    clock: C,
    timer: Receiver<Instant>,
    ticker: Receiver<Instant>,
}

impl<C: Clock> Alarms<C> {
    /// Create disarmed alarms.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timer: never(),
            ticker: never(),
        }
    }

    /// Arm the deadline for `remaining` and restart the ticker.
    ///
    /// Replaces any previously armed alarms. Zero or negative durations
    /// fire immediately.
    pub fn arm(&mut self, remaining: TimeDelta) {
        self.ticker = self.clock.ticker(TICK);
        self.timer = self.clock.timer(remaining.to_std().unwrap_or(Duration::ZERO));
    }

    /// Stop both alarms.
    pub fn disarm(&mut self) {
        self.timer = never();
        self.ticker = never();
    }

    pub fn timer(&self) -> &Receiver<Instant> {
        &self.timer
    }

    pub fn ticker(&self) -> &Receiver<Instant> {
        &self.ticker
    }
}
