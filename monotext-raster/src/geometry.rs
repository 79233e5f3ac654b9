//! Panel geometry
//!
//! The four dimensions a panel is configured with, and the fixed
//! logical-to-physical transform derived from them.

use core::fmt;

/// Geometry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// A dimension is zero
    Empty,
    /// Logical and physical dimensions are not a 90° swap of each other
    Mismatch,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("display dimension is zero"),
            Self::Mismatch => f.write_str("logical and physical dimensions do not match"),
        }
    }
}

/// Display dimensions in both coordinate spaces
///
/// Invariant: `logical_width == physical_height` and
/// `logical_height == physical_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    logical_width: u16,
    logical_height: u16,
    physical_width: u16,
    physical_height: u16,
}

/// Framebuffer size of [`Geometry::SH1107_128X64`] in bytes
pub const SH1107_BUFFER_SIZE: usize = Geometry::SH1107_128X64.buffer_size();

impl Default for Geometry {
    fn default() -> Self {
        Self::SH1107_128X64
    }
}

impl Geometry {
    /// SH1107 64x128 OLED used in landscape (128x64 text area)
    pub const SH1107_128X64: Self = Self {
        logical_width: 128,
        logical_height: 64,
        physical_width: 64,
        physical_height: 128,
    };

    /// Create a geometry from all four dimensions
    pub fn new(
        logical_width: u16,
        logical_height: u16,
        physical_width: u16,
        physical_height: u16,
    ) -> Result<Self, GeometryError> {
        let geometry = Self {
            logical_width,
            logical_height,
            physical_width,
            physical_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Create a geometry from the logical size, deriving the physical one
    pub fn from_logical(width: u16, height: u16) -> Result<Self, GeometryError> {
        Self::new(width, height, height, width)
    }

    /// Check the dimension invariants
    ///
    /// Needed after deserializing, which bypasses [`Geometry::new`].
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.logical_width == 0
            || self.logical_height == 0
            || self.physical_width == 0
            || self.physical_height == 0
        {
            return Err(GeometryError::Empty);
        }

        if self.logical_width != self.physical_height
            || self.logical_height != self.physical_width
        {
            return Err(GeometryError::Mismatch);
        }

        Ok(())
    }

    /// Logical (drawing API) width
    pub const fn logical_width(&self) -> u16 {
        self.logical_width
    }

    /// Logical (drawing API) height
    pub const fn logical_height(&self) -> u16 {
        self.logical_height
    }

    /// Physical (controller scan order) width
    pub const fn physical_width(&self) -> u16 {
        self.physical_width
    }

    /// Physical (controller scan order) height
    pub const fn physical_height(&self) -> u16 {
        self.physical_height
    }

    /// Number of 8-row pages, rounding a partial page up
    pub const fn pages(&self) -> usize {
        (self.physical_height as usize + 7) / 8
    }

    /// Framebuffer size in bytes: `ceil(logical_width * logical_height / 8)`
    pub const fn buffer_size(&self) -> usize {
        (self.logical_width as usize * self.logical_height as usize + 7) / 8
    }

    /// Map a logical coordinate to physical space
    ///
    /// `px = physical_width - y - 1`, `py = x`. Widened to `i64` so no
    /// `i32` input can overflow.
    pub fn to_physical(&self, x: i32, y: i32) -> (i64, i64) {
        let px = i64::from(self.physical_width) - i64::from(y) - 1;
        let py = i64::from(x);
        (px, py)
    }

    /// Framebuffer byte holding physical pixel `(px, py)`
    ///
    /// Returns `None` outside the physical rectangle, and for pixels of a
    /// partial last page that fall past [`Geometry::buffer_size`].
    pub fn byte_index(&self, px: i64, py: i64) -> Option<usize> {
        if px < 0
            || py < 0
            || px >= i64::from(self.physical_width)
            || py >= i64::from(self.physical_height)
        {
            return None;
        }

        let index = (py as usize / 8) * self.physical_width as usize + px as usize;
        (index < self.buffer_size()).then_some(index)
    }

    /// Whether a logical coordinate lies on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (px, py) = self.to_physical(x, y);
        self.byte_index(px, py).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sh1107_preset() {
        let g = Geometry::SH1107_128X64;
        assert_eq!(g.validate(), Ok(()));
        assert_eq!(g.buffer_size(), 1024);
        assert_eq!(SH1107_BUFFER_SIZE, 1024);
        assert_eq!(g.pages(), 16);
        assert_eq!(Geometry::default(), g);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert_eq!(Geometry::new(128, 64, 128, 64), Err(GeometryError::Mismatch));
        assert_eq!(Geometry::new(0, 64, 64, 0), Err(GeometryError::Empty));
        assert_eq!(Geometry::from_logical(128, 64), Ok(Geometry::SH1107_128X64));
    }

    #[test]
    fn test_transform_corners() {
        let g = Geometry::SH1107_128X64;
        // Logical top-left lands in the last physical column, first row
        assert_eq!(g.to_physical(0, 0), (63, 0));
        assert_eq!(g.to_physical(127, 63), (0, 127));
        assert_eq!(g.to_physical(0, 63), (0, 0));
    }

    #[test]
    fn test_transform_extremes_do_not_overflow() {
        let g = Geometry::SH1107_128X64;
        let (px, py) = g.to_physical(i32::MAX, i32::MIN);
        assert_eq!(py, i64::from(i32::MAX));
        assert!(px > 0);
        assert!(!g.contains(i32::MAX, i32::MIN));
        assert!(!g.contains(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_byte_index_packing() {
        let g = Geometry::SH1107_128X64;
        assert_eq!(g.byte_index(0, 0), Some(0));
        assert_eq!(g.byte_index(63, 7), Some(63));
        assert_eq!(g.byte_index(0, 8), Some(64));
        assert_eq!(g.byte_index(63, 127), Some(1023));
        assert_eq!(g.byte_index(64, 0), None);
        assert_eq!(g.byte_index(0, 128), None);
        assert_eq!(g.byte_index(-1, 0), None);
    }

    #[test]
    fn test_partial_page_stays_in_buffer() {
        // 12 logical columns -> 12 physical rows, second page half used
        let g = Geometry::from_logical(12, 6).unwrap();
        assert_eq!(g.buffer_size(), 9);
        assert_eq!(g.pages(), 2);
        assert_eq!(g.byte_index(5, 7), Some(5));
        assert_eq!(g.byte_index(2, 8), Some(8));
        // Addressable in physical space, but past the end of the buffer
        assert_eq!(g.byte_index(3, 8), None);
        assert_eq!(g.byte_index(5, 11), None);
    }

    #[test]
    fn test_contains_matches_logical_bounds() {
        let g = Geometry::SH1107_128X64;
        assert!(g.contains(0, 0));
        assert!(g.contains(127, 63));
        assert!(!g.contains(128, 0));
        assert!(!g.contains(0, 64));
        assert!(!g.contains(-1, 0));
        assert!(!g.contains(0, -1));
    }
}
