//! Panel trait
//!
//! Defines the interface to the display controller.

use core::fmt;

use monotext_raster::RasterError;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Panel not initialized
    NotInitialized,
    /// Framebuffer does not fit its storage
    BufferOverflow,
    /// Geometry rejected
    InvalidGeometry,
}

impl From<RasterError> for DisplayError {
    fn from(e: RasterError) -> Self {
        match e {
            RasterError::Geometry(_) => Self::InvalidGeometry,
            RasterError::BufferOverflow => Self::BufferOverflow,
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Communication => "panel communication failed",
            Self::NotInitialized => "panel not initialized",
            Self::BufferOverflow => "framebuffer too large",
            Self::InvalidGeometry => "invalid display geometry",
        };
        f.write_str(msg)
    }
}

/// Display controller
///
/// Implementations own the bus and whatever reset and power-on sequence
/// the controller needs.
pub trait Panel {
    /// Bring the panel up (reset, configure, display on)
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Transfer a packed framebuffer
    ///
    /// - `buffer`: pages of 8 physical rows, one byte per physical column,
    ///   left to right, top page first
    /// - `width`, `height`: physical dimensions in pixels
    fn draw_bitmap(&mut self, buffer: &[u8], width: u16, height: u16)
        -> Result<(), DisplayError>;

    /// Check if the panel accepts transfers
    fn is_ready(&self) -> bool;
}
