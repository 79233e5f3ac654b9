//! Display session
//!
//! Ties one panel to one raster engine for the lifetime of the display.
//! Dropping the session releases both.

use monotext_raster::{Geometry, Raster, SH1107_BUFFER_SIZE};

use crate::panel::{DisplayError, Panel};

/// Session for the SH1107 128x64 preset
pub type Sh1107Display<P> = Display<P, SH1107_BUFFER_SIZE>;

/// A panel together with the framebuffer drawn for it
pub struct Display<P, const CAP: usize> {
    panel: P,
    raster: Raster<CAP>,
}

impl<P: Panel, const CAP: usize> Display<P, CAP> {
    /// Allocate the framebuffer and bring the panel up
    ///
    /// The geometry is checked before the panel is touched.
    pub fn init(mut panel: P, geometry: Geometry) -> Result<Self, DisplayError> {
        #[cfg(feature = "defmt")]
        defmt::info!("Initializing display");

        let raster = Raster::new(geometry).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to allocate framebuffer: {}", e);
            DisplayError::from(e)
        })?;

        if let Err(e) = panel.init() {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to initialize panel: {}", e);
            return Err(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Display initialized ({}x{}, {} byte buffer)",
            geometry.logical_width(),
            geometry.logical_height(),
            raster.buffer_size()
        );

        Ok(Self { panel, raster })
    }

    /// Send the framebuffer to the panel
    pub fn update(&mut self) -> Result<(), DisplayError> {
        if !self.panel.is_ready() {
            #[cfg(feature = "defmt")]
            defmt::error!("Update on a panel that is not ready");
            return Err(DisplayError::NotInitialized);
        }

        let geometry = *self.raster.geometry();
        let result = self.panel.draw_bitmap(
            self.raster.buffer(),
            geometry.physical_width(),
            geometry.physical_height(),
        );

        if let Err(_e) = &result {
            #[cfg(feature = "defmt")]
            defmt::warn!("Framebuffer transfer failed: {}", _e);
        }

        result
    }

    /// Clear the framebuffer
    pub fn clear(&mut self) {
        self.raster.clear();
    }

    /// Draw a string at logical `(x, y)`
    pub fn draw_string(&mut self, text: &str, x: i32, y: i32) {
        self.raster.draw_string(text, x, y);
    }

    /// Get the raster engine
    pub fn raster(&self) -> &Raster<CAP> {
        &self.raster
    }

    /// Get the raster engine for drawing
    pub fn raster_mut(&mut self) -> &mut Raster<CAP> {
        &mut self.raster
    }

    /// Get the panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// End the session, returning the panel
    pub fn release(self) -> P {
        #[cfg(feature = "defmt")]
        defmt::info!("Releasing display");

        self.panel
    }
}
