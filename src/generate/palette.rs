//! Palette synthesis by mode.

use rand::Rng;

use crate::types::{Colour, PaletteMode, PaletteStore};

/// Number of colours synthesized per render.
pub const PALETTE_SIZE: usize = 6;

/// Hue used by mono mode.
pub const MONO_BASE_HUE: f64 = 0.60;

/// Build a palette for `mode`.
///
/// Synthesized modes draw hue, saturation and value for each of `count`
/// colours in turn from `rng`. Custom mode returns the store contents and
/// ignores `count` and `base_hue`.
pub fn generate_palette<R: Rng + ?Sized>(
    mode: PaletteMode,
    count: usize,
    base_hue: f64,
    store: &PaletteStore,
    rng: &mut R,
) -> Vec<Colour> {
    if mode == PaletteMode::Custom {
        return store.colours();
    }

    (0..count)
        .map(|_| {
            let (h, s, v) = match mode {
                PaletteMode::Pastel => (
                    rng.gen::<f64>(),
                    rng.gen_range(0.15..=0.35),
                    rng.gen_range(0.9..=1.0),
                ),
                PaletteMode::Vivid => (
                    rng.gen::<f64>(),
                    rng.gen_range(0.8..=1.0),
                    rng.gen_range(0.8..=1.0),
                ),
                PaletteMode::Mono => (base_hue, rng.gen_range(0.2..=0.6), rng.gen_range(0.5..=1.0)),
                PaletteMode::Random | PaletteMode::Custom => (
                    rng.gen::<f64>(),
                    rng.gen_range(0.3..=1.0),
                    rng.gen_range(0.5..=1.0),
                ),
            };
            Colour::from_hsv(h, s, v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn in_unit(c: &Colour) -> bool {
        [c.r, c.g, c.b].iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_synthesized_modes_count_and_range() {
        let store = PaletteStore::new();
        for mode in [
            PaletteMode::Pastel,
            PaletteMode::Vivid,
            PaletteMode::Mono,
            PaletteMode::Random,
        ] {
            let colours = generate_palette(mode, PALETTE_SIZE, MONO_BASE_HUE, &store, &mut rng());
            assert_eq!(colours.len(), PALETTE_SIZE, "{}", mode);
            assert!(colours.iter().all(in_unit), "{}", mode);
        }
    }

    #[test]
    fn test_mono_hue_is_fixed() {
        let colours = generate_palette(
            PaletteMode::Mono,
            20,
            MONO_BASE_HUE,
            &PaletteStore::new(),
            &mut rng(),
        );
        for c in &colours {
            assert!((c.hue() - MONO_BASE_HUE).abs() < 1e-6, "hue {}", c.hue());
        }
    }

    #[test]
    fn test_pastel_is_light() {
        let colours = generate_palette(
            PaletteMode::Pastel,
            50,
            MONO_BASE_HUE,
            &PaletteStore::new(),
            &mut rng(),
        );
        for c in &colours {
            // value >= 0.9 means the brightest channel is at least 0.9
            assert!(c.r.max(c.g).max(c.b) >= 0.9 - 1e-9);
        }
    }

    #[test]
    fn test_custom_returns_store_contents() {
        let mut store = PaletteStore::new();
        store.add("rose", 0.9, 0.3, 0.4).unwrap();

        let colours = generate_palette(PaletteMode::Custom, 2, MONO_BASE_HUE, &store, &mut rng());
        assert_eq!(colours, store.colours());
    }

    #[test]
    fn test_custom_empty_store() {
        let colours = generate_palette(PaletteMode::Custom, 6, MONO_BASE_HUE, &PaletteStore::empty(), &mut rng());
        assert!(colours.is_empty());
    }

    #[test]
    fn test_same_seed_same_palette() {
        let store = PaletteStore::new();
        let a = generate_palette(PaletteMode::Vivid, 6, MONO_BASE_HUE, &store, &mut rng());
        let b = generate_palette(PaletteMode::Vivid, 6, MONO_BASE_HUE, &store, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let colours = generate_palette(PaletteMode::Random, 0, MONO_BASE_HUE, &PaletteStore::new(), &mut rng());
        assert!(colours.is_empty());
    }
}
