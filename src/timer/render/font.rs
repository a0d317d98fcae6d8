//! Block-digit font for the clock face.
//!
//! Every glyph is [`GLYPH_HEIGHT`] rows tall. Spaces inside a row are
//! transparent; any other character is painted as-is.

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Blank columns appended after each glyph.
pub const GLYPH_SPACING: usize = 1;

/// A single character of the clock font.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Character this glyph draws
    pub ch: char,
    /// Pixel rows, top to bottom
    pub rows: &'static [&'static str],
}

static GLYPHS: [Glyph; 13] = [
    Glyph {
        ch: '0',
        rows: &["█████", "█   █", "█   █", "█   █", "█████"],
    },
    Glyph {
        ch: '1',
        rows: &["    █", "    █", "    █", "    █", "    █"],
    },
    Glyph {
        ch: '2',
        rows: &["█████", "    █", "█████", "█    ", "█████"],
    },
    Glyph {
        ch: '3',
        rows: &["█████", "    █", "█████", "    █", "█████"],
    },
    Glyph {
        ch: '4',
        rows: &["█   █", "█   █", "█████", "    █", "    █"],
    },
    Glyph {
        ch: '5',
        rows: &["█████", "█    ", "█████", "    █", "█████"],
    },
    Glyph {
        ch: '6',
        rows: &["█████", "█    ", "█████", "█   █", "█████"],
    },
    Glyph {
        ch: '7',
        rows: &["█████", "    █", "    █", "    █", "    █"],
    },
    Glyph {
        ch: '8',
        rows: &["█████", "█   █", "█████", "█   █", "█████"],
    },
    Glyph {
        ch: '9',
        rows: &["█████", "█   █", "█████", "    █", "█████"],
    },
    Glyph {
        ch: ':',
        rows: &[" ", "█", " ", "█", " "],
    },
    Glyph {
        ch: '-',
        rows: &["   ", "   ", "███", "   ", "   "],
    },
    Glyph {
        ch: ' ',
        rows: &["  ", "  ", "  ", "  ", "  "],
    },
];

/// Look up the glyph for `ch`, falling back to a blank glyph.
pub fn glyph(ch: char) -> &'static Glyph {
    GLYPHS
        .iter()
        .find(|glyph| glyph.ch == ch)
        .unwrap_or(&GLYPHS[GLYPHS.len() - 1])
}
