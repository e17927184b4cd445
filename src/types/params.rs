//! Render parameters and palette modes.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::PosterError;

use super::BlobParams;

/// How the render palette is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// Light, low-saturation colours
    #[default]
    Pastel,
    /// Saturated, bright colours
    Vivid,
    /// One fixed hue with varying saturation and value
    Mono,
    /// Broad random sampling
    Random,
    /// Colours from the session palette store
    Custom,
}

impl PaletteMode {
    pub const ALL: [PaletteMode; 5] = [
        PaletteMode::Pastel,
        PaletteMode::Vivid,
        PaletteMode::Mono,
        PaletteMode::Random,
        PaletteMode::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteMode::Pastel => "pastel",
            PaletteMode::Vivid => "vivid",
            PaletteMode::Mono => "mono",
            PaletteMode::Random => "random",
            PaletteMode::Custom => "custom",
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteMode {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PosterError::Parse {
                message: format!("Unknown palette mode: {}", s),
                help: Some("Use one of: pastel, vivid, mono, random, custom".to_string()),
            })
    }
}

/// Accepted ranges for render parameters.
pub mod limits {
    use super::RangeInclusive;

    pub const LAYERS: RangeInclusive<u32> = 3..=20;
    pub const SEED: RangeInclusive<u32> = 0..=9999;
    pub const RADIUS: RangeInclusive<f64> = 0.05..=0.8;
    pub const WOBBLE: RangeInclusive<f64> = 0.01..=2.0;
    pub const PETALS: RangeInclusive<u32> = 1..=10;
}

/// Everything a render request needs apart from the palette store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterParams {
    /// Number of blob layers.
    pub layers: u32,
    /// Palette mode.
    pub mode: PaletteMode,
    /// RNG seed.
    pub seed: u32,
    /// Base blob radius in poster units.
    pub radius: f64,
    /// Lobe amplitude.
    pub wobble: f64,
    /// Lobe count.
    pub petals: u32,
}

impl PosterParams {
    /// Shape parameters for every blob on the poster.
    pub fn blob_params(&self) -> BlobParams {
        BlobParams::new(self.wobble, self.petals)
    }

    /// Caption shown on the poster.
    pub fn caption(&self) -> String {
        format!("Interactive Poster • {}", self.mode)
    }
}

impl Default for PosterParams {
    fn default() -> Self {
        Self {
            layers: 8,
            mode: PaletteMode::Pastel,
            seed: 0,
            radius: 0.3,
            wobble: 0.15,
            petals: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("mono".parse::<PaletteMode>().unwrap(), PaletteMode::Mono);
        assert_eq!(" Vivid ".parse::<PaletteMode>().unwrap(), PaletteMode::Vivid);
        assert!("csv".parse::<PaletteMode>().is_err());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&PaletteMode::Custom).unwrap();
        assert_eq!(json, "\"custom\"");
    }

    #[test]
    fn test_caption() {
        let params = PosterParams {
            mode: PaletteMode::Mono,
            ..Default::default()
        };
        insta::assert_snapshot!(params.caption(), @"Interactive Poster • mono");
    }

    #[test]
    fn test_defaults_within_limits() {
        let p = PosterParams::default();
        assert!(limits::LAYERS.contains(&p.layers));
        assert!(limits::SEED.contains(&p.seed));
        assert!(limits::RADIUS.contains(&p.radius));
        assert!(limits::WOBBLE.contains(&p.wobble));
        assert!(limits::PETALS.contains(&p.petals));
    }
}
