//! Polygon rasterization of posters.
//!
//! Each draw command is filled with the non-zero winding rule, sampled at
//! pixel centres, and blended over what is already on the canvas. Poster
//! space has y pointing up, so rows are flipped on the way in.

use image::{Rgba, RgbaImage};

use crate::types::{Colour, DrawCommand, Point, Poster};

/// An accumulation canvas with floating-point channels.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Map a poster-space point to pixel coordinates.
    fn to_pixel(&self, p: Point) -> (f64, f64) {
        (p.x * self.width as f64, (1.0 - p.y) * self.height as f64)
    }

    /// Fill one polygon.
    pub fn fill(&mut self, command: &DrawCommand) {
        if command.outline.len() < 3 || command.opacity <= 0.0 {
            return;
        }

        let pts: Vec<(f64, f64)> = command.outline.iter().map(|&p| self.to_pixel(p)).collect();
        let (min_y, max_y) = pts
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

        let first_row = min_y.floor().max(0.0) as u32;
        let last_row = (max_y.ceil().max(0.0) as u32).min(self.height);
        let alpha = command.opacity.min(1.0);

        let mut crossings: Vec<(f64, i32)> = Vec::new();
        for row in first_row..last_row {
            let sy = row as f64 + 0.5;
            crossings.clear();

            for i in 0..pts.len() {
                let (x0, y0) = pts[i];
                let (x1, y1) = pts[(i + 1) % pts.len()];
                let dir = if y0 <= sy && y1 > sy {
                    1
                } else if y1 <= sy && y0 > sy {
                    -1
                } else {
                    continue;
                };
                let t = (sy - y0) / (y1 - y0);
                crossings.push((x0 + t * (x1 - x0), dir));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding != 0 {
                    self.blend_span(row, pair[0].0, pair[1].0, command.fill, alpha);
                }
            }
        }
    }

    /// Blend pixels whose centres fall in `[x_start, x_end)`.
    fn blend_span(&mut self, row: u32, x_start: f64, x_end: f64, colour: Colour, alpha: f64) {
        let first = (x_start - 0.5).ceil().max(0.0) as u32;
        let end = ((x_end - 0.5).ceil().max(0.0) as u32).min(self.width);

        for x in first..end {
            let i = self.index(x, row);
            self.pixels[i] = colour.over(self.pixels[i], alpha);
        }
    }

    /// Quantize to an 8-bit image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.index(x, y)].to_rgba8(1.0))
        })
    }
}

/// Paint a poster onto a fresh canvas.
///
/// The caption is not drawn; its text and anchor travel with the poster for
/// surfaces that can render type.
pub fn paint(poster: &Poster, width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height, poster.background);
    for layer in &poster.layers {
        for command in layer.draw_commands() {
            canvas.fill(&command);
        }
    }
    canvas
}

/// Rasterize a poster to an RGBA image.
pub fn rasterize(poster: &Poster, width: u32, height: u32) -> RgbaImage {
    paint(poster, width, height).to_image()
}
