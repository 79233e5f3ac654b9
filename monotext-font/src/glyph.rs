//! Glyph lookup
//!
//! Maps characters to their 5x7 bitmaps. Lookup never fails: anything
//! outside printable ASCII resolves to the `?` glyph.

use crate::table::FONT_5X7;
use crate::{CHAR_ADVANCE, FALLBACK_CHAR, FIRST_CHAR, FONT_HEIGHT, FONT_WIDTH, LAST_CHAR};

/// A single 5x7 character bitmap
///
/// Stored column-major: `columns[c]` bit `r` is pixel `(c, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    columns: [u8; FONT_WIDTH],
}

impl Glyph {
    /// Create a glyph from raw column bytes
    pub const fn from_columns(columns: [u8; FONT_WIDTH]) -> Self {
        Self { columns }
    }

    /// Raw column bytes
    pub const fn columns(&self) -> &[u8; FONT_WIDTH] {
        &self.columns
    }

    /// Column byte at `col`, or 0 past the glyph edge
    pub fn column(&self, col: usize) -> u8 {
        self.columns.get(col).copied().unwrap_or(0)
    }

    /// Whether pixel `(col, row)` is on
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        row < FONT_HEIGHT && self.column(col) & (1 << row) != 0
    }

    /// Iterate over the lit pixels, column by column, top to bottom
    pub fn pixels(&self) -> GlyphPixels {
        GlyphPixels {
            glyph: *self,
            col: 0,
            row: 0,
        }
    }

    /// Whether no pixel is lit (space)
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|&c| c == 0)
    }
}

/// Iterator over the lit pixels of a [`Glyph`]
#[derive(Debug, Clone)]
pub struct GlyphPixels {
    glyph: Glyph,
    col: usize,
    row: usize,
}

impl Iterator for GlyphPixels {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.col < FONT_WIDTH {
            let (col, row) = (self.col, self.row);

            self.row += 1;
            if self.row == FONT_HEIGHT {
                self.row = 0;
                self.col += 1;
            }

            if self.glyph.is_set(col, row) {
                return Some((col, row));
            }
        }
        None
    }
}

/// Replace any character without a glyph by `?`
pub fn normalize(ch: char) -> char {
    match u8::try_from(ch) {
        Ok(byte) => normalize_byte(byte) as char,
        Err(_) => FALLBACK_CHAR,
    }
}

/// Byte variant of [`normalize`]
pub fn normalize_byte(byte: u8) -> u8 {
    if (FIRST_CHAR..=LAST_CHAR).contains(&byte) {
        byte
    } else {
        FALLBACK_CHAR as u8
    }
}

/// Get the glyph for a character
pub fn lookup(ch: char) -> Glyph {
    lookup_byte(normalize(ch) as u8)
}

/// Get the glyph for a raw byte
pub fn lookup_byte(byte: u8) -> Glyph {
    let index = (normalize_byte(byte) - FIRST_CHAR) as usize;
    Glyph::from_columns(FONT_5X7[index])
}

/// Horizontal span covered by `text` at the fixed character advance
pub fn text_width(text: &str) -> usize {
    text.chars().count() * CHAR_ADVANCE
}
