//! Individual parameter checks.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::types::{limits, PaletteMode, PaletteStore, PosterParams};

use super::Diagnostic;

fn check_range<T>(name: &str, value: T, range: &RangeInclusive<T>) -> Option<Diagnostic>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return None;
    }

    Some(
        Diagnostic::error(
            format!("bloom::param::{}", name),
            format!("{} = {} is out of range", name, value),
        )
        .with_help(format!(
            "{} must be between {} and {}",
            name,
            range.start(),
            range.end()
        )),
    )
}

pub fn check_layers(params: &PosterParams) -> Option<Diagnostic> {
    check_range("layers", params.layers, &limits::LAYERS)
}

pub fn check_seed(params: &PosterParams) -> Option<Diagnostic> {
    check_range("seed", params.seed, &limits::SEED)
}

pub fn check_radius(params: &PosterParams) -> Option<Diagnostic> {
    check_range("radius", params.radius, &limits::RADIUS)
}

pub fn check_wobble(params: &PosterParams) -> Option<Diagnostic> {
    check_range("wobble", params.wobble, &limits::WOBBLE)
}

pub fn check_petals(params: &PosterParams) -> Option<Diagnostic> {
    check_range("petals", params.petals, &limits::PETALS)
}

/// Custom mode with nothing in the store renders a bare poster.
pub fn check_custom_palette(params: &PosterParams, store: &PaletteStore) -> Option<Diagnostic> {
    if params.mode != PaletteMode::Custom || !store.is_empty() {
        return None;
    }

    Some(
        Diagnostic::warning(
            "bloom::palette::empty",
            "custom palette is empty, the poster will have no layers",
        )
        .with_help("Add a colour with --add NAME=#RRGGBB"),
    )
}
