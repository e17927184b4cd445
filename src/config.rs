//! Project configuration (bloom.yaml).
//!
//! Supplies default render parameters, extra palette colours for new
//! sessions, and preview size. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};
use crate::types::{NamedColour, PosterParams};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "bloom.yaml";

/// Configuration loaded from bloom.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Render parameters used when a flag is not given.
    pub defaults: PosterParams,

    /// Colours appended to the default palette store at session start.
    pub palette: Vec<NamedColour>,

    /// Terminal preview size.
    pub preview: PreviewSize,
}

/// Terminal preview size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSize {
    pub columns: u32,
    pub rows: u32,
}

impl Default for PreviewSize {
    // Matches the 6:8 poster aspect with two pixels per cell.
    fn default() -> Self {
        Self { columns: 48, rows: 32 }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PosterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PosterError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// Load `explicit` if given, otherwise `./bloom.yaml` when it exists.
    ///
    /// Returns the path that was read alongside the config.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::load(path)?, Some(path.to_path_buf()))),
            None => {
                let path = PathBuf::from(CONFIG_FILE);
                if path.is_file() {
                    Ok((Self::load(&path)?, Some(path)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, PaletteMode};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_defaults() {
        let config = Config::parse("defaults:\n  mode: vivid\n  layers: 12\n").unwrap();

        assert_eq!(config.defaults.mode, PaletteMode::Vivid);
        assert_eq!(config.defaults.layers, 12);
        assert_eq!(config.defaults.radius, 0.3);
        assert_eq!(config.preview, PreviewSize::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
defaults:
  layers: 5
  mode: custom
  seed: 42
  radius: 0.2
  wobble: 0.5
  petals: 7
palette:
  - name: rose
    r: 0.9
    g: 0.3
    b: 0.4
preview:
  columns: 30
  rows: 20
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.defaults.seed, 42);
        assert_eq!(config.defaults.petals, 7);
        assert_eq!(
            config.palette,
            vec![NamedColour::new("rose", Colour::new(0.9, 0.3, 0.4))]
        );
        assert_eq!(config.preview, PreviewSize { columns: 30, rows: 20 });
    }

    #[test]
    fn test_parse_invalid_mode() {
        assert!(Config::parse("defaults:\n  mode: neon\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "defaults:\n  seed: 7\n").unwrap();

        let (config, found) = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.defaults.seed, 7);
        assert_eq!(found, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Config::load(&dir.path().join("nope.yaml")).is_err());
    }
}
