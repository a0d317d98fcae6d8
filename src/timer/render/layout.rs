//! Text layout for the clock face.
//!
//! Maps each character of the formatted time to a glyph cell and reports
//! the size of the resulting block so it can be centered.

use unicode_width::UnicodeWidthStr;

use super::font::{glyph, Glyph, GLYPH_SPACING};

/// One character of laid-out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    glyph: &'static Glyph,
}

impl GlyphCell {
    /// Glyph cell for `ch`.
    pub fn new(ch: char) -> Self {
        Self { glyph: glyph(ch) }
    }

    /// Horizontal advance: the glyph's widest row plus spacing.
    pub fn width(&self) -> usize {
        let art = self.glyph.rows.iter().map(|row| row.width()).max();
        art.unwrap_or(0) + GLYPH_SPACING
    }

    pub fn height(&self) -> usize {
        self.glyph.rows.len()
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.glyph.rows
    }
}

/// A laid-out string of glyph cells, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    cells: Vec<GlyphCell>,
}

impl Text {
    /// Total width: sum of cell advances.
    pub fn width(&self) -> usize {
        self.cells.iter().map(GlyphCell::width).sum()
    }

    /// Tallest cell, or 0 for empty text.
    pub fn height(&self) -> usize {
        self.cells.iter().map(GlyphCell::height).max().unwrap_or(0)
    }

    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Lay out `s` as glyph cells.
pub fn layout(s: &str) -> Text {
    Text {
        cells: s.chars().map(GlyphCell::new).collect(),
    }
}
