//! Truecolour terminal preview.
//!
//! Two poster rows share one character cell: the upper pixel is the
//! foreground of `▀`, the lower one the background.

use std::fmt::Write;

use crate::types::Poster;

use super::raster::paint;

const RESET: &str = "\x1b[0m";

/// Render a preview `columns` wide and `rows` character lines tall.
pub fn preview(poster: &Poster, columns: u32, rows: u32) -> String {
    let canvas = paint(poster, columns, rows * 2);
    let mut out = String::new();

    for row in 0..rows {
        for x in 0..columns {
            let top = canvas.get(x, row * 2).unwrap_or(poster.background).to_rgb8();
            let bottom = canvas.get(x, row * 2 + 1).unwrap_or(poster.background).to_rgb8();
            let _ = write!(
                out,
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
            );
        }
        out.push_str(RESET);
        out.push('\n');
    }

    out
}
