//! Display session and panel boundary for monotext
//!
//! This crate provides:
//! - `Panel` trait for the controller that receives the packed framebuffer
//! - `Display`, a session owning one panel and one raster engine
//! - `StatusPage` / `StatusLoop`, the frame timing readout
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  StatusLoop / application    │
//! └──────────────────────────────┘
//!                │ clear, draw_string
//!                ▼
//! ┌──────────────────────────────┐
//! │  Display (this crate)        │── update() ──▶ Panel (bus driver)
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │  monotext-raster             │
//! └──────────────────────────────┘
//! ```
//!
//! Bus setup and controller command sequences live behind `Panel`
//! implementations; this crate only hands over the buffer and its
//! physical dimensions.

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
pub mod session;
pub mod status;

// Re-export key types
pub use panel::{DisplayError, Panel};
pub use session::{Display, Sh1107Display};
pub use status::{Clock, FrameStats, StatusLoop, StatusPage};

pub use monotext_raster::{Geometry, Raster};
