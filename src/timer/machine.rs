//! The countdown state machine and its event loop.
//!
//! `Countdown` owns the terminal, the alarms and the time state. The loop
//! waits on three sources at once (input, ticker, deadline) and applies
//! whichever is ready first. Nothing else touches this state, so no locking
//! is involved.

use anyhow::{Context, Result};
use chrono::TimeDelta;
use crossbeam_channel::{never, select, Receiver};
use crossterm::event::Event;
use ratatui::backend::Backend;
use ratatui::Terminal;

use super::alarm::{Alarms, Clock};
use super::input::map_event;
use super::render::{format_duration, render};
use super::state::{CountdownState, InputEvent, Phase, StepResult, Trigger};

/// An interactive countdown bound to a drawable terminal.
pub struct Countdown<B: Backend, C: Clock> {
    terminal: Terminal<B>,
    alarms: Alarms<C>,
    state: CountdownState,
}

impl<B: Backend, C: Clock> Countdown<B, C> {
    /// Create a countdown for `duration`. Nothing is drawn or armed until
    /// [`start`](Self::start) or [`run`](Self::run).
    pub fn new(terminal: Terminal<B>, clock: C, duration: TimeDelta) -> Self {
        Self {
            terminal,
            alarms: Alarms::new(clock),
            state: CountdownState::new(duration),
        }
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Draw the starting value and arm the alarms.
    pub fn start(&mut self) -> Result<()> {
        tracing::info!(
            duration = %format_duration(self.state.started),
            "countdown started"
        );
        self.redraw()?;
        self.alarms.arm(self.state.remaining);
        Ok(())
    }

    /// Run until the user quits.
    ///
    /// Returns `Ok(())` only for a Quit. Keeps running after expiry so the
    /// countdown can still be restarted.
    pub fn run(&mut self, input: Receiver<Event>) -> Result<()> {
        self.start()?;

        let mut input = input;
        loop {
            let trigger = select! {
                recv(input) -> event => event.ok().map(|event| Trigger::Input(map_event(&event))),
                recv(self.alarms.ticker()) -> _ => Some(Trigger::Tick),
                recv(self.alarms.timer()) -> _ => Some(Trigger::Deadline),
            };

            match trigger {
                Some(trigger) => {
                    if self.handle(trigger)? == StepResult::Quit {
                        return Ok(());
                    }
                }
                None => {
                    tracing::warn!("input source disconnected; keyboard controls unavailable");
                    input = never();
                }
            }
        }
    }

    /// Apply a single trigger.
    pub fn handle(&mut self, trigger: Trigger) -> Result<StepResult> {
        match trigger {
            Trigger::Input(event) => return self.handle_input(event),
            Trigger::Tick => {
                if self.state.phase != Phase::Running {
                    return Ok(StepResult::Continue);
                }
                self.state.tick();
                tracing::trace!(remaining = %format_duration(self.state.remaining), "tick");
                self.redraw()?;
            }
            Trigger::Deadline => {
                if self.state.phase != Phase::Running {
                    return Ok(StepResult::Continue);
                }
                self.alarms.disarm();
                self.state.expire();
                tracing::info!(
                    remaining = %format_duration(self.state.remaining),
                    "countdown expired"
                );
                self.redraw()?;
            }
        }
        Ok(StepResult::Continue)
    }

    fn handle_input(&mut self, event: InputEvent) -> Result<StepResult> {
        match event {
            InputEvent::Quit => {
                self.alarms.disarm();
                tracing::info!(
                    remaining = %format_duration(self.state.remaining),
                    "countdown cancelled"
                );
                return Ok(StepResult::Quit);
            }
            InputEvent::Restart => {
                self.state.restart();
                self.alarms.arm(self.state.started);
                tracing::debug!(duration = %format_duration(self.state.started), "restarted");
                self.redraw()?;
            }
            InputEvent::TogglePause => {
                self.state.toggle_pause();
                if self.state.is_paused() {
                    self.alarms.disarm();
                    tracing::debug!(remaining = %format_duration(self.state.remaining), "paused");
                } else {
                    self.alarms.arm(self.state.remaining);
                    tracing::debug!(remaining = %format_duration(self.state.remaining), "resumed");
                }
            }
            InputEvent::Resize => self.redraw()?,
            InputEvent::Other => {}
        }
        Ok(StepResult::Continue)
    }

    fn redraw(&mut self) -> Result<()> {
        render(&mut self.terminal, self.state.remaining).context("failed to draw countdown")
    }
}
