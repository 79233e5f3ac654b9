//! Frame timing status page
//!
//! Renders the clock, the time since the previous frame, and how long the
//! previous panel transfer took:
//!
//! ```text
//!  y=0   1234567
//!  y=10  16412 dt
//!  y=20  15873us display
//! ```

use core::fmt::Write;

use heapless::String;
use monotext_raster::Raster;

use crate::panel::Panel;
use crate::session::Display;

/// Maximum characters per status line
pub const LINE_LEN: usize = 32;

/// Vertical distance between status lines
pub const LINE_SPACING: i32 = 10;

/// Monotonic microsecond clock
pub trait Clock {
    /// Current time in microseconds (wraps at `u32::MAX`)
    fn now_us(&mut self) -> u32;
}

/// Timing figures shown on the status page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Clock reading at the start of the frame
    pub now_us: u32,
    /// Time since the previous frame started
    pub delta_us: i64,
    /// Duration of the previous panel transfer
    pub transfer_us: i64,
}

/// Three-line timing readout
#[derive(Debug, Clone, Copy)]
pub struct StatusPage {
    x: i32,
    y: i32,
}

impl Default for StatusPage {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPage {
    /// Status page at the default position (1, 0)
    pub const fn new() -> Self {
        Self { x: 1, y: 0 }
    }

    /// Status page with its first line at logical `(x, y)`
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Draw the readout; does not clear first
    pub fn draw<const CAP: usize>(&self, stats: &FrameStats, raster: &mut Raster<CAP>) {
        let mut line: String<LINE_LEN> = String::new();

        // Overflow only truncates the line
        let _ = write!(line, "{}", stats.now_us);
        raster.draw_string(&line, self.x, self.y);

        line.clear();
        let _ = write!(line, "{} dt", stats.delta_us);
        raster.draw_string(&line, self.x, self.y + LINE_SPACING);

        line.clear();
        let _ = write!(line, "{}us display", stats.transfer_us);
        raster.draw_string(&line, self.x, self.y + 2 * LINE_SPACING);
    }
}

/// Render loop driving the status page
///
/// Each [`StatusLoop::frame`] clears, draws, and transfers one frame,
/// timing the transfer for the next one.
#[derive(Debug, Clone, Default)]
pub struct StatusLoop {
    page: StatusPage,
    last_us: i64,
    last_transfer_us: i64,
}

impl StatusLoop {
    /// Create a loop drawing `page`
    pub const fn new(page: StatusPage) -> Self {
        Self {
            page,
            last_us: 0,
            last_transfer_us: 0,
        }
    }

    /// Render and transfer one frame
    ///
    /// Transfer errors are dropped; the session has already logged them
    /// and the next frame retries.
    pub fn frame<P, C, const CAP: usize>(
        &mut self,
        display: &mut Display<P, CAP>,
        clock: &mut C,
    ) -> FrameStats
    where
        P: Panel,
        C: Clock,
    {
        display.clear();

        let now = clock.now_us();
        let stats = FrameStats {
            now_us: now,
            delta_us: i64::from(now) - self.last_us,
            transfer_us: self.last_transfer_us,
        };
        self.last_us = i64::from(now);

        self.page.draw(&stats, display.raster_mut());

        let start = clock.now_us();
        display.update().ok();
        let end = clock.now_us();
        self.last_transfer_us = i64::from(end.wrapping_sub(start));

        stats
    }
}
