//! Rendering surfaces for posters.
//!
//! Posters are vector descriptions; this module turns them into pixels,
//! either as an in-memory image or a terminal preview.

mod raster;
pub mod terminal;

pub use raster::{paint, rasterize, Canvas};
