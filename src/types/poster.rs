//! Layers, posters and the draw commands a surface consumes.

use serde::Serialize;

use super::{Blob, Colour, Point, PosterParams};

/// Copies drawn per layer to fake a blur.
pub const BLUR_COPIES: usize = 5;

/// One placed blob with its colour, opacity and blur jitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub blob: Blob,
    pub colour: Colour,
    /// Opacity of the first copy; copy `i` uses `alpha / (i + 1)`.
    pub alpha: f64,
    /// Offset applied to each blur copy.
    pub jitter: [(f64, f64); BLUR_COPIES],
}

impl Layer {
    /// Opacity of blur copy `index`.
    pub fn copy_alpha(&self, index: usize) -> f64 {
        self.alpha / (index + 1) as f64
    }

    /// The stacked copies for this layer, first copy first.
    pub fn draw_commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.jitter
            .iter()
            .enumerate()
            .map(move |(i, &(dx, dy))| DrawCommand {
                outline: self.blob.translated(dx, dy),
                fill: self.colour,
                opacity: self.copy_alpha(i),
            })
    }
}

/// A filled polygon for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub outline: Vec<Point>,
    pub fill: Colour,
    pub opacity: f64,
}

/// Text label with a fixed anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    /// Top-left anchor in poster space.
    pub anchor: Point,
    pub font_size: f64,
    pub bold: bool,
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: Point::new(0.05, 0.95),
            font_size: 12.0,
            bold: true,
        }
    }
}

/// A finished poster. Built once per render and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poster {
    pub params: PosterParams,
    pub background: Colour,
    pub palette: Vec<Colour>,
    pub layers: Vec<Layer>,
    pub caption: Caption,
}

impl Poster {
    pub const BACKGROUND: Colour = Colour::grey(0.97);

    /// All draw commands in painter's order.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.layers.iter().flat_map(|layer| layer.draw_commands()).collect()
    }

    /// Surface-facing view of the poster.
    pub fn scene(&self) -> Scene {
        Scene {
            background: self.background,
            commands: self.draw_commands(),
            caption: self.caption.clone(),
        }
    }
}

/// What a rendering surface needs: background, commands, caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub background: Colour,
    pub commands: Vec<DrawCommand>,
    pub caption: Caption,
}
