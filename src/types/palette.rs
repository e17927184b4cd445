//! Session palette store for named custom colours.
//!
//! The store is a display list rather than a keyed map: names may repeat,
//! order is insertion order, and removal drops every entry with a matching
//! name.

use serde::{Deserialize, Serialize};

use crate::error::{PosterError, Result};

use super::Colour;

/// A colour with a user-facing name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColour {
    pub name: String,
    #[serde(flatten)]
    pub colour: Colour,
}

impl NamedColour {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            name: name.into(),
            colour,
        }
    }
}

/// Result of removing colours by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No entry carried the name; the store is unchanged.
    NotFound,
    /// This many entries were removed.
    Removed(usize),
}

impl RemoveOutcome {
    /// Number of entries removed (zero when nothing matched).
    pub fn removed_count(self) -> usize {
        match self {
            RemoveOutcome::NotFound => 0,
            RemoveOutcome::Removed(n) => n,
        }
    }
}

/// Ordered, mutable list of named colours owned by one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteStore {
    entries: Vec<NamedColour>,
}

impl PaletteStore {
    /// Create a store seeded with the default colours.
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.initialize();
        store
    }

    /// Create a store with no colours at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in seed colours: sky, sun and forest.
    pub fn defaults() -> Vec<NamedColour> {
        vec![
            NamedColour::new("sky", Colour::new(0.4, 0.7, 1.0)),
            NamedColour::new("sun", Colour::new(1.0, 0.8, 0.2)),
            NamedColour::new("forest", Colour::new(0.2, 0.6, 0.3)),
        ]
    }

    /// Populate the defaults if the store is empty. Idempotent.
    pub fn initialize(&mut self) {
        if self.entries.is_empty() {
            self.entries = Self::defaults();
        }
    }

    /// Append a colour. Duplicate names are allowed.
    ///
    /// Fails if the name is blank or a channel lies outside `[0, 1]`.
    pub fn add(&mut self, name: impl Into<String>, r: f64, g: f64, b: f64) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PosterError::invalid(
                "colour name is empty",
                "Give the colour a name, e.g. rose",
            ));
        }
        let colour = Colour::try_new(r, g, b)?;
        self.entries.push(NamedColour::new(name, colour));
        Ok(())
    }

    /// Append a named colour, with the same checks as `add`.
    pub fn push(&mut self, entry: NamedColour) -> Result<()> {
        let Colour { r, g, b } = entry.colour;
        self.add(entry.name, r, g, b)
    }

    /// Remove every entry named `name`.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name != name);

        match before - self.entries.len() {
            0 => RemoveOutcome::NotFound,
            n => RemoveOutcome::Removed(n),
        }
    }

    /// Current entries in insertion order.
    pub fn list(&self) -> &[NamedColour] {
        &self.entries
    }

    /// The colours alone, in store order.
    pub fn colours(&self) -> Vec<Colour> {
        self.entries.iter().map(|entry| entry.colour).collect()
    }

    /// Check whether any entry carries the name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
