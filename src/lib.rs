//! bloom - Abstract flower poster generator
//!
//! A library for turning a handful of parameters (layer count, palette mode,
//! blob radius, wobble, petals and a seed) into a layered poster of
//! blurred rose-curve blobs.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod session;
pub mod types;
pub mod validation;

pub use config::Config;
pub use error::{PosterError, Result};
pub use generate::{blob, compose_layers, generate_palette, generate_random_seed, render};
pub use render::{rasterize, Canvas};
pub use session::Session;
pub use types::{
    Blob, BlobParams, Caption, Colour, DrawCommand, Layer, NamedColour, PaletteMode, PaletteStore,
    Point, Poster, PosterParams, RemoveOutcome, Scene,
};
pub use validation::{check_params, Diagnostic, Severity, ValidationResult};
