//! Core domain types for bloom.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values with HSV conversion
//! - `PaletteStore` - Session-owned list of named custom colours
//! - `Blob` - Closed rose-curve outlines
//! - `Poster` - Finished layers, background and caption

mod colour;
mod palette;
mod params;
mod poster;
mod shape;

pub use colour::Colour;
pub use palette::{NamedColour, PaletteStore, RemoveOutcome};
pub use params::{limits, PaletteMode, PosterParams};
pub use poster::{Caption, DrawCommand, Layer, Poster, Scene, BLUR_COPIES};
pub use shape::{Blob, BlobParams, Point};
