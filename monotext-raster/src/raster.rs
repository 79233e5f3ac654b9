//! Raster engine
//!
//! Owns the packed framebuffer and draws pixels, glyphs, and strings into
//! it using logical coordinates.

use core::fmt;

use heapless::Vec;
use monotext_font::{lookup, lookup_byte, Glyph, CHAR_ADVANCE};

use crate::geometry::{Geometry, GeometryError, SH1107_BUFFER_SIZE};

/// Raster construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// Invalid panel geometry
    Geometry(GeometryError),
    /// Geometry needs more bytes than the buffer capacity
    BufferOverflow,
}

impl From<GeometryError> for RasterError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "invalid geometry: {e}"),
            Self::BufferOverflow => f.write_str("framebuffer exceeds capacity"),
        }
    }
}

/// Raster sized for the SH1107 128x64 preset
pub type Sh1107Raster = Raster<SH1107_BUFFER_SIZE>;

/// 1bpp framebuffer with text drawing
///
/// `CAP` is the storage capacity in bytes. The live buffer is exactly
/// [`Geometry::buffer_size`] bytes long. All drawing goes through
/// [`Raster::set_pixel`], which only ever turns pixels on.
pub struct Raster<const CAP: usize> {
    geometry: Geometry,
    buffer: Vec<u8, CAP>,
}

impl<const CAP: usize> Raster<CAP> {
    /// Create a zero-filled raster for `geometry`
    pub fn new(geometry: Geometry) -> Result<Self, RasterError> {
        geometry.validate()?;

        let size = geometry.buffer_size();
        if size > CAP {
            return Err(RasterError::BufferOverflow);
        }

        let mut buffer = Vec::new();
        buffer
            .resize(size, 0)
            .map_err(|_| RasterError::BufferOverflow)?;

        Ok(Self { geometry, buffer })
    }

    /// Panel geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Framebuffer length in bytes
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Packed framebuffer, ready for transfer to the controller
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Zero the whole framebuffer
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.buffer.iter().all(|&b| b == 0)
    }

    /// Turn on the pixel at logical `(x, y)`
    ///
    /// Coordinates off the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        let (px, py) = self.geometry.to_physical(x, y);
        let Some(index) = self.geometry.byte_index(px, py) else {
            return;
        };

        if let Some(byte) = self.buffer.get_mut(index) {
            *byte |= 1 << (py as usize % 8);
        }
    }

    /// Read the pixel at logical `(x, y)`; off-panel reads are `false`
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        let (px, py) = self.geometry.to_physical(x, y);
        self.geometry
            .byte_index(px, py)
            .and_then(|index| self.buffer.get(index))
            .is_some_and(|byte| byte & (1 << (py as usize % 8)) != 0)
    }

    /// Draw a glyph with its top-left corner at logical `(x, y)`
    pub fn draw_glyph(&mut self, glyph: &Glyph, x: i32, y: i32) {
        for (col, row) in glyph.pixels() {
            self.set_pixel(x.saturating_add(col as i32), y.saturating_add(row as i32));
        }
    }

    /// Draw a character; anything outside printable ASCII draws `?`
    pub fn draw_char(&mut self, ch: char, x: i32, y: i32) {
        self.draw_glyph(&lookup(ch), x, y);
    }

    /// Draw a string left to right starting at logical `(x, y)`
    ///
    /// No wrapping: text past the right edge is clipped.
    pub fn draw_string(&mut self, text: &str, x: i32, y: i32) {
        let mut cursor = x;
        for ch in text.chars() {
            self.draw_char(ch, cursor, y);
            cursor = cursor.saturating_add(CHAR_ADVANCE as i32);
        }
    }

    /// Draw raw bytes, one glyph per byte
    pub fn draw_bytes(&mut self, bytes: &[u8], x: i32, y: i32) {
        let mut cursor = x;
        for &byte in bytes {
            self.draw_glyph(&lookup_byte(byte), cursor, y);
            cursor = cursor.saturating_add(CHAR_ADVANCE as i32);
        }
    }
}

impl<const CAP: usize> AsRef<[u8]> for Raster<CAP> {
    fn as_ref(&self) -> &[u8] {
        self.buffer()
    }
}

impl<const CAP: usize> fmt::Debug for Raster<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("geometry", &self.geometry)
            .field("buffer_size", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monotext_font::FONT_WIDTH;

    fn raster() -> Sh1107Raster {
        Raster::new(Geometry::SH1107_128X64).unwrap()
    }

    fn lit_bits(raster: &Sh1107Raster) -> u32 {
        raster.buffer().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_new_is_zeroed() {
        let r = raster();
        assert_eq!(r.buffer_size(), 1024);
        assert!(r.is_blank());
    }

    #[test]
    fn test_new_rejects_small_capacity() {
        let result = Raster::<512>::new(Geometry::SH1107_128X64);
        assert_eq!(result.err(), Some(RasterError::BufferOverflow));
    }

    #[test]
    fn test_set_pixel_origin() {
        let mut r = raster();
        r.set_pixel(0, 0);

        // px = 63, py = 0 -> byte 63, bit 0
        assert_eq!(r.buffer()[63], 0x01);
        assert_eq!(lit_bits(&r), 1);
        assert!(r.pixel(0, 0));
    }

    #[test]
    fn test_set_pixel_packs_pages() {
        let mut r = raster();
        r.set_pixel(9, 2);

        // px = 61, py = 9 -> page 1, byte 64 + 61, bit 1
        assert_eq!(r.buffer()[125], 0x02);
        assert_eq!(lit_bits(&r), 1);
    }

    #[test]
    fn test_set_pixel_is_idempotent_or() {
        let mut r = raster();
        r.set_pixel(3, 5);
        r.set_pixel(3, 5);
        r.set_pixel(4, 5);
        assert_eq!(lit_bits(&r), 2);
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut r = raster();
        r.set_pixel(-1, 0);
        r.set_pixel(0, -1);
        r.set_pixel(128, 0);
        r.set_pixel(0, 64);
        r.set_pixel(i32::MAX, i32::MAX);
        r.set_pixel(i32::MIN, i32::MIN);
        assert!(r.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut r = raster();
        r.draw_string("Hello", 0, 0);
        assert!(!r.is_blank());

        r.clear();
        assert!(r.is_blank());
        assert_eq!(r.buffer_size(), 1024);
    }

    #[test]
    fn test_draw_char_i_layout() {
        let mut r = raster();
        r.draw_char('I', 0, 0);

        // Glyph column c -> bit c, glyph row r -> byte 63 - r
        let buf = r.buffer();
        assert_eq!(buf[57], 0x0E);
        for &byte in &buf[58..63] {
            assert_eq!(byte, 0x04);
        }
        assert_eq!(buf[63], 0x0E);
        assert_eq!(lit_bits(&r), 11);
    }

    #[test]
    fn test_draw_char_logical_orientation() {
        let mut r = raster();
        r.draw_char('L', 10, 20);

        // 'L': full left column, bottom row across
        for row in 0..7 {
            assert!(r.pixel(10, 20 + row));
        }
        for col in 0..5 {
            assert!(r.pixel(10 + col, 26));
        }
        assert!(!r.pixel(11, 20));
    }

    #[test]
    fn test_unknown_char_matches_question_mark() {
        let mut expected = raster();
        expected.draw_char('?', 0, 0);

        let mut r = raster();
        r.draw_char('\u{1}', 0, 0);
        assert_eq!(r.buffer(), expected.buffer());

        r.clear();
        r.draw_char('€', 0, 0);
        assert_eq!(r.buffer(), expected.buffer());
    }

    #[test]
    fn test_draw_string_advances_by_six() {
        let mut expected = raster();
        expected.draw_char('A', 0, 0);
        expected.draw_char('B', (FONT_WIDTH + 1) as i32, 0);

        let mut r = raster();
        r.draw_string("AB", 0, 0);
        assert_eq!(r.buffer(), expected.buffer());
    }

    #[test]
    fn test_draw_string_single_char() {
        let mut expected = raster();
        expected.draw_char('A', 3, 4);

        let mut r = raster();
        r.draw_string("A", 3, 4);
        assert_eq!(r.buffer(), expected.buffer());
    }

    #[test]
    fn test_draw_string_empty() {
        let mut r = raster();
        r.draw_string("", 0, 0);
        assert!(r.is_blank());
    }

    #[test]
    fn test_draw_string_clips_right_edge() {
        let mut r = raster();
        // 22 characters need 132px, the panel has 128
        r.draw_string("WWWWWWWWWWWWWWWWWWWWWW", 0, 0);
        assert!(r.pixel(126, 0));
        assert!(!r.pixel(128, 0));
        assert_eq!(r.buffer_size(), 1024);
    }

    #[test]
    fn test_draw_string_partially_off_top() {
        let mut full = raster();
        full.draw_char('H', 0, 0);

        let mut r = raster();
        r.draw_char('H', 0, -3);
        // Rows 3..7 of the glyph survive at y = 0..4
        for col in 0..5 {
            for row in 3..7 {
                assert_eq!(r.pixel(col, row - 3), full.pixel(col, row));
            }
        }
    }

    #[test]
    fn test_draw_bytes_substitutes_per_byte() {
        let mut expected = raster();
        expected.draw_string("A??", 0, 0);

        let mut r = raster();
        r.draw_bytes(&[b'A', 0xC3, 0xA9], 0, 0);
        assert_eq!(r.buffer(), expected.buffer());
    }

    #[test]
    fn test_non_multiple_of_eight_geometry() {
        let geometry = Geometry::from_logical(12, 6).unwrap();
        let mut r = Raster::<16>::new(geometry).unwrap();
        assert_eq!(r.buffer_size(), 9);

        for x in -2..14 {
            for y in -2..8 {
                r.set_pixel(x, y);
            }
        }
        assert_eq!(r.buffer_size(), 9);
        // Page 0 full, page 1 only reaches byte 8
        assert!(r.buffer()[..6].iter().all(|&b| b == 0xFF));
        assert_eq!(r.buffer()[6..], [0x0F, 0x0F, 0x0F]);
    }
}
