//! Keyboard bindings for the countdown.
//!
//! `Esc` / `Ctrl-C` quit, `r` restarts, `p` toggles pause. Everything
//! else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::timer::state::InputEvent;

/// Map a key event to the countdown action it triggers.
pub fn map_key_event(key: KeyEvent) -> InputEvent {
    // Terminals with keyboard enhancement also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return InputEvent::Other;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        // === Quit ===
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('c') if ctrl => InputEvent::Quit,

        // === Timer controls ===
        KeyCode::Char('r') if !ctrl => InputEvent::Restart,
        KeyCode::Char('p') if !ctrl => InputEvent::TogglePause,

        _ => InputEvent::Other,
    }
}
