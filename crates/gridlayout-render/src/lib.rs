//! Rendering primitives for gridlayout.
//!
//! This crate provides pixel geometry ([`Point`], [`Size`], [`Rect`]), colors,
//! paint state and the [`Canvas`] drawing abstraction. [`DisplayList`] is a
//! recording canvas, useful for tests and for hosts that replay commands on
//! their own backend.

pub mod canvas;
pub mod error;
pub mod paint;
pub mod types;

pub use canvas::{Canvas, DisplayList, DrawCommand};
pub use error::ColorParseError;
pub use paint::{Paint, PaintStyle};
pub use types::{Color, Point, Rect, Size};
