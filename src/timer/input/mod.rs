//! Input handling for the countdown.
//!
//! A background thread turns the blocking terminal read into messages on a
//! rendezvous channel, and the main loop maps each raw event to an
//! [`InputEvent`].

mod keyboard;

pub use keyboard::map_key_event;

use std::io;
use std::thread;

use crossbeam_channel::{bounded, Receiver};
use crossterm::event::Event;

use crate::timer::state::InputEvent;

/// Map any terminal event to a countdown input.
pub fn map_event(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) => map_key_event(*key),
        Event::Resize(_, _) => InputEvent::Resize,
        _ => InputEvent::Other, // Ignore mouse, focus and paste events
    }
}

/// Start the input source thread.
///
/// Calls `read` in a loop and hands every event to the returned receiver.
/// The channel has no buffer: the thread blocks on each send until the
/// consumer takes the event, so at most one event is in flight and none
/// is dropped.
///
/// There is no stop signal. The thread ends when `read` fails or the
/// receiver is dropped; otherwise it lives until the process exits.
pub fn spawn_input_source<F>(mut read: F) -> io::Result<Receiver<Event>>
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    let (tx, rx) = bounded(0);
    thread::Builder::new()
        .name("countdown-input".to_string())
        .spawn(move || loop {
            let event = match read() {
                Ok(event) => event,
                Err(err) => {
                    tracing::error!(error = %err, "failed to read terminal event");
                    return;
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!("input consumer gone, stopping input source");
                return;
            }
        })?;
    Ok(rx)
}
