//! Colour type, HSV conversion and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{encoding, Hsv, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};

/// An RGB colour with floating-point channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A neutral grey with all channels set to `level`.
    pub const fn grey(level: f64) -> Self {
        Self::new(level, level, level)
    }

    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a colour from checked channels, rejecting anything outside `[0, 1]`.
    pub fn try_new(r: f64, g: f64, b: f64) -> Result<Self> {
        for (label, value) in [("red", r), ("green", g), ("blue", b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PosterError::invalid(
                    format!("{} channel {} is outside [0, 1]", label, value),
                    "Colour channels are fractions between 0.0 and 1.0",
                ));
            }
        }
        Ok(Self::new(r, g, b))
    }

    /// Convert hue, saturation and value (all in `[0, 1]`) to RGB.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let hsv = Hsv::<encoding::Srgb, f64>::new(h * 360.0, s, v);
        let rgb: Srgb<f64> = hsv.into_color();
        Self::new(
            rgb.red.clamp(0.0, 1.0),
            rgb.green.clamp(0.0, 1.0),
            rgb.blue.clamp(0.0, 1.0),
        )
    }

    /// Hue as a fraction of a full turn in `[0, 1)`.
    pub fn hue(self) -> f64 {
        let hsv: Hsv<encoding::Srgb, f64> = Srgb::new(self.r, self.g, self.b).into_color();
        hsv.hue.into_positive_degrees() / 360.0
    }

    /// Parse a hex colour string (`#RGB` or `#RRGGBB`, hash optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let bytes = match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let d = parse_hex_digit(c)?;
                    out[i] = d << 4 | d;
                }
                out
            }
            6 if hex.is_ascii() => [
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            ],
            _ => {
                return Err(PosterError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB or #RRGGBB format".to_string()),
                })
            }
        };

        Ok(Self::new(
            bytes[0] as f64 / 255.0,
            bytes[1] as f64 / 255.0,
            bytes[2] as f64 / 255.0,
        ))
    }

    /// Quantize to 8-bit RGB.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Quantize to 8-bit RGBA with the given opacity.
    pub fn to_rgba8(self, alpha: f64) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, to_byte(alpha)]
    }

    /// Blend `self` over `dst` with the given opacity.
    pub fn over(self, dst: Colour, alpha: f64) -> Colour {
        let inv = 1.0 - alpha;
        Colour::new(
            self.r * alpha + dst.r * inv,
            self.g * alpha + dst.g * inv,
            self.b * alpha + dst.b * inv,
        )
    }
}

impl FromStr for Colour {
    type Err = PosterError;

    /// Accepts hex (`#66B3FF`) or three comma-separated floats (`0.4,0.7,1.0`).
    fn from_str(s: &str) -> Result<Self> {
        if !s.contains(',') {
            return Self::from_hex(s);
        }

        let channels = s
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| PosterError::Parse {
                    message: format!("Invalid colour channel: {}", part.trim()),
                    help: None,
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        match channels.as_slice() {
            [r, g, b] => Self::try_new(*r, *g, *b),
            _ => Err(PosterError::Parse {
                message: format!("Expected three channels, got {}", channels.len()),
                help: Some("Use r,g,b with each channel in [0, 1], e.g. 0.4,0.7,1.0".to_string()),
            }),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PosterError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PosterError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
