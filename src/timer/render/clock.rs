//! Clock face rendering.
//!
//! Paints the formatted remaining time in the middle of the terminal.
//! Each call starts from a blank frame and re-reads the terminal size, so
//! resizes between redraws are picked up automatically.

use std::io;

use chrono::TimeDelta;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;

use super::format::format_duration;
use super::layout::{layout, Text};

/// Foreground while time remains.
pub const RUNNING_COLOR: Color = Color::Reset;

/// Foreground once the countdown reaches zero.
pub const EXPIRED_COLOR: Color = Color::Red;

/// Color for the given remaining time.
pub fn clock_color(remaining: TimeDelta) -> Color {
    if remaining > TimeDelta::zero() {
        RUNNING_COLOR
    } else {
        EXPIRED_COLOR
    }
}

/// Top-left corner that centers `text` inside `area`.
///
/// May be negative (or off by one on odd sizes) when the text does not fit.
pub fn origin(area: Rect, text: &Text) -> (i32, i32) {
    let x = area.x as i32 + area.width as i32 / 2 - text.width() as i32 / 2;
    let y = area.y as i32 + area.height as i32 / 2 - text.height() as i32 / 2;
    (x, y)
}

/// Paint the clock for `remaining` into `buf`, clipped to `area`.
pub fn draw_clock(buf: &mut Buffer, area: Rect, remaining: TimeDelta) {
    let text = layout(&format_duration(remaining));
    let color = clock_color(remaining);
    let (mut x, y) = origin(area, &text);

    for cell in text.cells() {
        for (row_idx, row) in cell.rows().iter().enumerate() {
            for (col_idx, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let px = x + col_idx as i32;
                let py = y + row_idx as i32;
                if px < area.left() as i32
                    || py < area.top() as i32
                    || px >= area.right() as i32
                    || py >= area.bottom() as i32
                {
                    continue;
                }
                if let Some(target) = buf.cell_mut((px as u16, py as u16)) {
                    target.set_char(ch).set_fg(color);
                }
            }
        }
        x += cell.width() as i32;
    }
}

/// Clear the screen, paint the clock for `remaining`, and flush.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, remaining: TimeDelta) -> io::Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        draw_clock(frame.buffer_mut(), area, remaining);
    })?;
    Ok(())
}
