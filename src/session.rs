//! Per-user session state.
//!
//! A session owns its palette store and the current seed. Nothing is
//! shared between sessions and nothing outlives the process.

use crate::config::Config;
use crate::error::Result;
use crate::generate::{generate_random_seed, render};
use crate::types::{PaletteStore, Poster, PosterParams};

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: PaletteStore,
    current_seed: u32,
}

impl Session {
    /// Start a session with the default palette.
    pub fn new() -> Self {
        Self {
            store: PaletteStore::new(),
            current_seed: 0,
        }
    }

    /// Start a session from config: default palette plus configured
    /// colours, seed taken from the configured defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new();
        for entry in &config.palette {
            session.store.push(entry.clone())?;
        }
        session.current_seed = config.defaults.seed;
        Ok(session)
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PaletteStore {
        &mut self.store
    }

    pub fn current_seed(&self) -> u32 {
        self.current_seed
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.current_seed = seed;
    }

    /// Replace the current seed with a random one and return it.
    pub fn new_seed(&mut self) -> u32 {
        self.current_seed = generate_random_seed();
        self.current_seed
    }

    /// Render against this session's palette store.
    ///
    /// `params.seed` is used as given; callers that track the session seed
    /// copy `current_seed()` into it.
    pub fn render(&self, params: &PosterParams) -> Result<Poster> {
        render(params, &self.store)
    }
}
