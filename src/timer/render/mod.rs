//! Rendering components for the countdown clock.
//!
//! This module turns the remaining time into painted terminal cells:
//! formatting, the glyph font, text layout, and the centered clock face.

mod clock;
mod font;
mod format;
mod layout;

pub use clock::{clock_color, draw_clock, origin, render, EXPIRED_COLOR, RUNNING_COLOR};
pub use font::{glyph, Glyph, GLYPH_HEIGHT, GLYPH_SPACING};
pub use format::{format_duration, round_to_seconds};
pub use layout::{layout, GlyphCell, Text};
