//! End-to-end tests of the countdown loop.
//!
//! The loop runs on its own thread against a `TestBackend`, with alarms
//! and key presses delivered through rendezvous channels so every step is
//! applied in order.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use chrono::TimeDelta;
use countdown::timer::render::{format_duration, EXPIRED_COLOR, RUNNING_COLOR};
use countdown::timer::{Countdown, Phase, SystemClock};
use countdown::parse_duration;
use crossbeam_channel::{bounded, Sender};
use crossterm::event::Event;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::helpers::{ctrl_c, esc, expected_screen, key, AlarmRemote, ManualClock};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

type Finished = (Countdown<TestBackend, ManualClock>, Result<()>);

struct Harness {
    keys: Sender<Event>,
    alarms: AlarmRemote,
    handle: JoinHandle<Finished>,
}

impl Harness {
    fn start(duration: &str) -> Self {
        let duration = parse_duration(duration).unwrap();
        let (clock, alarms) = ManualClock::new();
        let (keys, input) = bounded(0);
        let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

        let handle = thread::spawn(move || {
            let mut countdown = Countdown::new(terminal, clock, duration);
            let result = countdown.run(input);
            (countdown, result)
        });

        Self {
            keys,
            alarms,
            handle,
        }
    }

    fn press(&self, event: Event) {
        self.keys.send(event).expect("countdown loop gone");
    }

    /// Send Esc and wait for the loop to return.
    fn quit(self) -> Countdown<TestBackend, ManualClock> {
        self.press(esc());
        self.finish()
    }

    fn finish(self) -> Countdown<TestBackend, ManualClock> {
        let (countdown, result) = self.handle.join().expect("countdown thread panicked");
        result.expect("run returned an error");
        countdown
    }
}

fn painted_colors(countdown: &Countdown<TestBackend, ManualClock>) -> Vec<ratatui::style::Color> {
    countdown
        .terminal()
        .backend()
        .buffer()
        .content()
        .iter()
        .filter(|cell| cell.symbol() != " ")
        .map(|cell| cell.fg)
        .collect()
}

// ============================================================================
// Initial Display
// ============================================================================

#[test]
fn initial_display_matches_requested_duration() {
    for (input, shown) in [("25s", "00:25"), ("1m50s", "01:50"), ("2h45m50s", "2:45:50")] {
        assert_eq!(format_duration(parse_duration(input).unwrap()), shown);

        let countdown = Harness::start(input).quit();
        assert_eq!(
            countdown.terminal().backend().buffer(),
            &expected_screen(WIDTH, HEIGHT, parse_duration(input).unwrap()),
            "screen for {}",
            input
        );
    }
}

// ============================================================================
// Expiry
// ============================================================================

#[test]
fn twenty_five_ticks_expire_in_alert_color() {
    let harness = Harness::start("25s");
    harness.alarms.ticks(25);
    harness.alarms.deadline();
    let countdown = harness.quit();

    assert_eq!(countdown.state().remaining, TimeDelta::zero());
    assert_eq!(countdown.state().phase, Phase::Expired);
    assert_eq!(
        countdown.terminal().backend().buffer(),
        &expected_screen(WIDTH, HEIGHT, TimeDelta::zero())
    );
    let colors = painted_colors(&countdown);
    assert!(!colors.is_empty());
    assert!(colors.iter().all(|color| *color == EXPIRED_COLOR));
}

#[test]
fn restart_after_expiry_runs_again() {
    let harness = Harness::start("25s");
    harness.alarms.ticks(25);
    harness.alarms.deadline();
    harness.press(key('r'));
    harness.alarms.ticks(2);
    let countdown = harness.quit();

    assert_eq!(countdown.state().remaining, TimeDelta::seconds(23));
    assert_eq!(countdown.state().phase, Phase::Running);
    assert!(painted_colors(&countdown)
        .iter()
        .all(|color| *color == RUNNING_COLOR));
}

#[test]
fn wall_clock_run_ends_at_zero() {
    let (keys, input) = bounded(0);
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let handle = thread::spawn(move || {
        let mut countdown = Countdown::new(terminal, SystemClock, TimeDelta::seconds(3));
        let result = countdown.run(input);
        (countdown, result)
    });

    // Well past the deadline, so late ticks have had every chance to land
    thread::sleep(Duration::from_millis(4500));
    keys.send(esc()).unwrap();
    let (countdown, result) = handle.join().unwrap();
    result.unwrap();

    assert_eq!(countdown.state().remaining, TimeDelta::zero());
    assert_eq!(countdown.state().phase, Phase::Expired);
    assert_eq!(
        countdown.terminal().backend().buffer(),
        &expected_screen(WIDTH, HEIGHT, TimeDelta::zero())
    );
}

// ============================================================================
// Pause and Restart
// ============================================================================

#[test]
fn pause_and_resume_keep_remaining_time() {
    let harness = Harness::start("1m");
    harness.alarms.ticks(3);
    harness.press(key('p'));
    harness.press(key('x'));
    harness.press(key('p'));
    harness.alarms.tick();
    let countdown = harness.quit();

    assert_eq!(countdown.state().remaining, TimeDelta::seconds(56));
    assert_eq!(countdown.state().phase, Phase::Running);
}

#[test]
fn restart_resets_after_ticks_pauses_and_restarts() {
    let harness = Harness::start("1m50s");
    harness.alarms.ticks(5);
    harness.press(key('r'));
    harness.alarms.ticks(7);
    harness.press(key('p'));
    harness.press(key('r'));
    let countdown = harness.quit();

    assert_eq!(countdown.state().remaining, TimeDelta::seconds(110));
    assert_eq!(countdown.state().started, TimeDelta::seconds(110));
    assert_eq!(
        countdown.terminal().backend().buffer(),
        &expected_screen(WIDTH, HEIGHT, TimeDelta::seconds(110))
    );
}

// ============================================================================
// Quit
// ============================================================================

#[test]
fn ctrl_c_quits() {
    let harness = Harness::start("10s");
    harness.alarms.tick();
    harness.press(ctrl_c());
    let countdown = harness.finish();

    assert_eq!(countdown.state().remaining, TimeDelta::seconds(9));
}

#[test]
fn quit_while_paused() {
    let harness = Harness::start("10s");
    harness.press(key('p'));
    let countdown = harness.quit();

    assert_eq!(countdown.state().phase, Phase::Paused);
    assert_eq!(countdown.state().remaining, TimeDelta::seconds(10));
}
