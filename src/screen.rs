//! Terminal session setup and restore.
//!
//! Entering puts the terminal in raw mode on the alternate screen with the
//! cursor hidden. The guard undoes that on drop, on an explicit
//! [`ScreenGuard::restore`], and from a panic hook, so the user's shell is
//! never left in raw mode.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// Terminal type used by the binary.
pub type ScreenTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII guard for the full-screen terminal session.
pub struct ScreenGuard {
    _private: (),
}

impl ScreenGuard {
    /// Switch the terminal into full-screen mode and return a drawable
    /// terminal for it.
    pub fn enter() -> io::Result<(Self, ScreenTerminal)> {
        install_panic_hook();
        let guard = Self { _private: () };

        enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((guard, terminal))
    }

    /// Restore the terminal now.
    pub fn restore(&self) {
        restore_terminal();
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Undo whatever `ScreenGuard::enter` managed to set up. Safe to call
/// more than once.
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    if ALT_SCREEN_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
    }
    let _ = execute!(stdout, Show);
    let _ = stdout.flush();
}

fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}
