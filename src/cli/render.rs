//! Render command implementation.
//!
//! Applies palette edits, renders one poster and prints it as a terminal
//! preview, a JSON scene, or both.

use std::io::{self, Write};

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::terminal::preview;
use crate::session::Session;
use crate::types::{PaletteMode, Poster, PosterParams};
use crate::validation::{check_params, print_diagnostics};

use super::palette::PaletteEdits;

/// Render a poster
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Number of blob layers (3-20)
    #[arg(long, short)]
    pub layers: Option<u32>,

    /// Palette mode
    #[arg(long, short, value_enum)]
    pub mode: Option<PaletteMode>,

    /// Random seed (0-9999)
    #[arg(long, short, conflicts_with = "new_seed")]
    pub seed: Option<u32>,

    /// Draw a fresh random seed
    #[arg(long)]
    pub new_seed: bool,

    /// Base blob radius (0.05-0.8)
    #[arg(long, short)]
    pub radius: Option<f64>,

    /// Lobe amplitude (0.01-2.0)
    #[arg(long, short)]
    pub wobble: Option<f64>,

    /// Lobe count (1-10)
    #[arg(long, short)]
    pub petals: Option<u32>,

    #[command(flatten)]
    pub edits: PaletteEdits,

    /// Print the scene (background, draw commands, caption) as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a terminal preview (default unless --json is given)
    #[arg(long)]
    pub preview: bool,
}

impl RenderArgs {
    /// Flags layered over the configured defaults.
    pub fn params(&self, defaults: &PosterParams) -> PosterParams {
        PosterParams {
            layers: self.layers.unwrap_or(defaults.layers),
            mode: self.mode.unwrap_or(defaults.mode),
            seed: self.seed.unwrap_or(defaults.seed),
            radius: self.radius.unwrap_or(defaults.radius),
            wobble: self.wobble.unwrap_or(defaults.wobble),
            petals: self.petals.unwrap_or(defaults.petals),
        }
    }
}

pub fn run(args: RenderArgs, config: &Config, session: &mut Session, printer: &Printer) -> Result<()> {
    args.edits.apply(session, printer)?;

    let params = args.params(&config.defaults);
    if args.new_seed {
        session.new_seed();
    } else {
        session.set_seed(params.seed);
    }
    let params = PosterParams {
        seed: session.current_seed(),
        ..params
    };

    let diagnostics = check_params(&params, session.store());
    if let Some(err) = diagnostics.to_error() {
        return Err(err);
    }
    print_diagnostics(&diagnostics, printer);

    printer.status(
        "Rendering",
        &format!(
            "{} ({}, seed {})",
            plural(params.layers as usize, "layer", "layers"),
            params.mode,
            params.seed
        ),
    );
    let poster = session.render(&params)?;

    let swatches: Vec<String> = poster.palette.iter().map(|&c| printer.swatch(c)).collect();
    printer.info("Palette", &swatches.join(" "));

    write_poster(&mut io::stdout().lock(), &poster, &args, config)?;

    printer.status(
        "Finished",
        &format!(
            "{} with {}",
            poster.caption.text,
            plural(poster.layers.len(), "layer", "layers")
        ),
    );

    Ok(())
}

/// Write the JSON scene and/or the terminal preview to `out`.
pub fn write_poster(
    out: &mut impl Write,
    poster: &Poster,
    args: &RenderArgs,
    config: &Config,
) -> Result<()> {
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&poster.scene())?)?;
    }

    if args.preview || !args.json {
        write!(out, "{}", preview(poster, config.preview.columns, config.preview.rows))?;
        writeln!(out, "{}", poster.caption.text)?;
    }

    Ok(())
}
