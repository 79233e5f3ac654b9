//! 5x7 bitmap font for monochrome text rendering
//!
//! This crate provides:
//! - The glyph table for printable ASCII (0x20 to 0x7E)
//! - `Glyph`, a column-major view of a single character bitmap
//! - Lookup helpers that substitute `?` for anything outside the table
//!
//! # Glyph layout
//!
//! ```text
//!  col: 0 1 2 3 4
//!  bit0 . . # . .
//!  bit1 . # . # .
//!  ...
//!  bit6 # . . . #
//! ```
//!
//! Each glyph is five column bytes. Bit `r` of column `c` is pixel `(c, r)`,
//! bit 0 being the top row. Bit 7 is always clear.
//!
//! The table is immutable, process-wide data. It knows nothing about
//! framebuffers or display orientation.

#![no_std]
#![deny(unsafe_code)]

pub mod glyph;
mod table;

pub use glyph::{
    lookup, lookup_byte, normalize, normalize_byte, text_width, Glyph, GlyphPixels,
};
pub use table::FONT_5X7;

/// Glyph width in pixels
pub const FONT_WIDTH: usize = 5;

/// Glyph height in pixels
pub const FONT_HEIGHT: usize = 7;

/// Bytes stored per glyph (one per column)
pub const FONT_BYTES_PER_CHAR: usize = FONT_WIDTH;

/// Horizontal cursor advance after each character (glyph plus 1px gap)
pub const CHAR_ADVANCE: usize = FONT_WIDTH + 1;

/// First code point in the table (space)
pub const FIRST_CHAR: u8 = 0x20;

/// Last code point in the table (tilde)
pub const LAST_CHAR: u8 = 0x7E;

/// Substitute for any character without a glyph
pub const FALLBACK_CHAR: char = '?';

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;
