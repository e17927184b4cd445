pub mod completions;
pub mod palette;
pub mod render;
pub mod seed;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::session::Session;

/// bloom - Abstract flower poster generator
#[derive(Parser, Debug)]
#[command(name = "bloom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./bloom.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a poster
    Render(render::RenderArgs),

    /// Edit and list the session palette
    Palette(palette::PaletteArgs),

    /// Print a fresh random seed
    Seed(seed::SeedArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load config and open a session for a command.
pub fn start_session(config_path: Option<&Path>, printer: &Printer) -> Result<(Config, Session)> {
    let (config, path) = Config::discover(config_path)?;
    if let Some(path) = path {
        printer.info("Config", &display_path(&path));
    }
    let session = Session::from_config(&config)?;
    Ok((config, session))
}
