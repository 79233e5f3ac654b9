//! Glyph rasterizer for rotated, page-packed monochrome framebuffers
//!
//! This crate contains the drawing core that sits between text and the
//! display controller:
//!
//! - [`Geometry`]: the logical/physical dimension contract of a panel
//! - [`Raster`]: the framebuffer owner with pixel, character, and string
//!   drawing
//!
//! # Coordinate spaces
//!
//! ```text
//!   logical (x, y)                 physical (px, py)
//!   ┌──────── W ────────┐          ┌─── PW ───┐
//!   │ x →               │          │ px →     │
//!   │ y ↓               H   ──▶    │ py ↓     PH
//!   └───────────────────┘          │          │
//!                                  └──────────┘
//!   px = PW - y - 1,  py = x
//! ```
//!
//! The framebuffer is stored in physical space. Each byte holds eight
//! vertically stacked pixels of one physical column (one "page" row),
//! least significant bit on top.
//!
//! # Failure policy
//!
//! Drawing never fails. Pixels outside the panel are clipped, unknown
//! characters become `?`. Only construction returns a `Result`.

#![no_std]
#![deny(unsafe_code)]

pub mod geometry;
pub mod raster;

pub use geometry::{Geometry, GeometryError, SH1107_BUFFER_SIZE};
pub use raster::{Raster, RasterError, Sh1107Raster};

pub use monotext_font::{CHAR_ADVANCE, FONT_HEIGHT, FONT_WIDTH};
