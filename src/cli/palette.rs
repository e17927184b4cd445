//! Palette command and shared palette-edit flags.

use std::io::{self, Write};

use clap::Args;

use crate::error::{PosterError, Result};
use crate::output::{plural, Printer};
use crate::session::Session;
use crate::types::{NamedColour, RemoveOutcome};

/// Session palette edits, applied in order: adds, then removals.
#[derive(Args, Debug, Default)]
pub struct PaletteEdits {
    /// Add a colour: NAME=#RRGGBB or NAME=r,g,b (repeatable)
    #[arg(long = "add", value_name = "NAME=COLOUR", value_parser = parse_named_colour)]
    pub add: Vec<NamedColour>,

    /// Remove every colour with this name (repeatable)
    #[arg(long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,
}

impl PaletteEdits {
    /// Apply the edits to the session store.
    pub fn apply(&self, session: &mut Session, printer: &Printer) -> Result<()> {
        for entry in &self.add {
            session.store_mut().push(entry.clone())?;
            printer.status(
                "Added",
                &format!("{} {}", entry.name, printer.swatch(entry.colour)),
            );
        }

        for name in &self.remove {
            match session.store_mut().remove(name) {
                RemoveOutcome::Removed(n) => {
                    printer.status("Removed", &format!("{} ({})", name, plural(n, "entry", "entries")))
                }
                RemoveOutcome::NotFound => {
                    printer.warning("Missing", &format!("no colour named '{}'", name))
                }
            }
        }

        Ok(())
    }
}

/// Parse `NAME=COLOUR` for `--add`.
pub fn parse_named_colour(s: &str) -> std::result::Result<NamedColour, PosterError> {
    let (name, colour) = s.split_once('=').ok_or_else(|| PosterError::Parse {
        message: format!("Expected NAME=COLOUR, got '{}'", s),
        help: Some("e.g. --add rose=#E64D66 or --add rose=0.9,0.3,0.4".to_string()),
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PosterError::Parse {
            message: "Colour name is empty".to_string(),
            help: None,
        });
    }

    Ok(NamedColour::new(name, colour.parse()?))
}

/// Edit and list the session palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub edits: PaletteEdits,

    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, session: &mut Session, printer: &Printer) -> Result<()> {
    args.edits.apply(session, printer)?;

    let entries = session.store().list();
    if !args.json {
        printer.info("Palette", &plural(entries.len(), "colour", "colours"));
    }
    write_palette(&mut io::stdout().lock(), entries, args.json, printer)
}

/// Write entries as JSON or as a table.
pub fn write_palette(
    out: &mut impl Write,
    entries: &[NamedColour],
    json: bool,
    printer: &Printer,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
    } else {
        write!(out, "{}", palette_table(entries, printer))?;
    }
    Ok(())
}

/// Format entries as an aligned table.
pub fn palette_table(entries: &[NamedColour], printer: &Printer) -> String {
    let width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{:<width$}  {:>5} {:>5} {:>5}\n", "name", "r", "g", "b");
    for e in entries {
        let c = e.colour;
        out.push_str(&format!(
            "{:<width$}  {:>5.2} {:>5.2} {:>5.2}  {}\n",
            e.name,
            c.r,
            c.g,
            c.b,
            printer.swatch(c)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, PaletteStore};

    #[test]
    fn test_parse_named_colour_hex() {
        let entry = parse_named_colour("rose=#FF0000").unwrap();
        assert_eq!(entry, NamedColour::new("rose", Colour::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_parse_named_colour_channels() {
        let entry = parse_named_colour("dusk=0.2,0.1,0.5").unwrap();
        assert_eq!(entry.colour, Colour::new(0.2, 0.1, 0.5));
    }

    #[test]
    fn test_parse_named_colour_errors() {
        assert!(parse_named_colour("rose").is_err());
        assert!(parse_named_colour("=#FF0000").is_err());
        assert!(parse_named_colour("rose=1.0,2.0,0.0").is_err());
    }

    #[test]
    fn test_apply_edits() {
        let mut session = Session::new();
        let edits = PaletteEdits {
            add: vec![NamedColour::new("rose", Colour::new(0.9, 0.3, 0.4))],
            remove: vec!["sun".to_string(), "ocean".to_string()],
        };
        edits.apply(&mut session, &Printer::plain()).unwrap();

        let names: Vec<&str> = session.store().list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sky", "forest", "rose"]);
    }

    #[test]
    fn test_palette_table() {
        let entries = vec![
            NamedColour::new("sky", Colour::new(0.4, 0.7, 1.0)),
            NamedColour::new("forest", Colour::new(0.2, 0.6, 0.3)),
        ];
        let table = palette_table(&entries, &Printer::plain());
        insta::assert_snapshot!(table.trim_end(), @r"
        name        r     g     b
        sky      0.40  0.70  1.00  #66B3FF
        forest   0.20  0.60  0.30  #33994D
        ");
    }

    #[test]
    fn test_write_palette_json() {
        let mut out = Vec::new();
        write_palette(&mut out, &PaletteStore::defaults(), true, &Printer::plain()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[1]["name"], "sun");
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
