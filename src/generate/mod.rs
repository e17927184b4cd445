//! Poster generation pipeline.
//!
//! `render` owns the whole flow: seed one RNG stream, build the palette,
//! compose layers and wrap them in a `Poster`. The stream is created fresh
//! for every call and passed by reference, so unrelated renders never
//! influence each other.

mod blob;
mod compose;
mod palette;

pub use blob::blob;
pub use compose::{compose_layers, JITTER};
pub use palette::{generate_palette, MONO_BASE_HUE, PALETTE_SIZE};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::types::{limits, Caption, PaletteStore, Poster, PosterParams};
use crate::validation::check_params;

/// The RNG stream threaded through one render.
pub type PosterRng = ChaCha8Rng;

/// Create the stream for a seed.
pub fn seeded_rng(seed: u32) -> PosterRng {
    PosterRng::seed_from_u64(seed as u64)
}

/// Render a poster.
///
/// Output is fully determined by `params` and, in custom mode, by the
/// store contents at call time.
pub fn render(params: &PosterParams, store: &PaletteStore) -> Result<Poster> {
    if let Some(err) = check_params(params, store).to_error() {
        return Err(err);
    }

    let mut rng = seeded_rng(params.seed);
    let palette = generate_palette(params.mode, PALETTE_SIZE, MONO_BASE_HUE, store, &mut rng);
    let layers = compose_layers(
        params.layers as usize,
        &palette,
        params.radius,
        params.blob_params(),
        &mut rng,
    )?;

    Ok(Poster {
        params: *params,
        background: Poster::BACKGROUND,
        palette,
        layers,
        caption: Caption::new(params.caption()),
    })
}

/// Draw a fresh seed for the "new seed" action.
pub fn generate_random_seed() -> u32 {
    rand::thread_rng().gen_range(limits::SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PosterError;
    use crate::types::PaletteMode;
    use pretty_assertions::assert_eq;

    fn scenario() -> PosterParams {
        PosterParams {
            layers: 3,
            mode: PaletteMode::Mono,
            seed: 42,
            radius: 0.3,
            wobble: 0.15,
            petals: 5,
        }
    }

    #[test]
    fn test_scenario_mono_seed_42() {
        let poster = render(&scenario(), &PaletteStore::new()).unwrap();

        assert_eq!(poster.layers.len(), 3);
        assert!(poster.layers.iter().all(|l| l.blob.len() == 200));
        assert_eq!(poster.caption.text, "Interactive Poster • mono");
        assert_eq!(poster.palette.len(), PALETTE_SIZE);
        assert_eq!(poster.background, Poster::BACKGROUND);
    }

    #[test]
    fn test_render_is_deterministic() {
        let store = PaletteStore::new();
        for mode in [PaletteMode::Pastel, PaletteMode::Vivid, PaletteMode::Random] {
            let params = PosterParams {
                mode,
                seed: 1234,
                ..Default::default()
            };
            assert_eq!(render(&params, &store).unwrap(), render(&params, &store).unwrap());
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let store = PaletteStore::new();
        let a = render(&scenario(), &store).unwrap();
        let b = render(&PosterParams { seed: 43, ..scenario() }, &store).unwrap();
        assert_ne!(a.layers, b.layers);
    }

    #[test]
    fn test_custom_mode_uses_store() {
        let mut store = PaletteStore::new();
        store.add("rose", 0.9, 0.3, 0.4).unwrap();
        let params = PosterParams {
            mode: PaletteMode::Custom,
            ..Default::default()
        };

        let poster = render(&params, &store).unwrap();
        assert_eq!(poster.palette, store.colours());
        assert!(poster.layers.iter().all(|l| store.colours().contains(&l.colour)));
    }

    #[test]
    fn test_custom_mode_empty_store_renders_no_layers() {
        let params = PosterParams {
            mode: PaletteMode::Custom,
            ..Default::default()
        };
        let poster = render(&params, &PaletteStore::empty()).unwrap();

        assert!(poster.layers.is_empty());
        assert!(poster.draw_commands().is_empty());
        assert_eq!(poster.caption.text, "Interactive Poster • custom");
    }

    #[test]
    fn test_out_of_range_params_fail_fast() {
        let store = PaletteStore::new();
        let too_many = PosterParams {
            layers: 21,
            ..Default::default()
        };
        assert!(matches!(
            render(&too_many, &store),
            Err(PosterError::InvalidParameter { .. })
        ));

        let big_seed = PosterParams {
            seed: 10_000,
            ..Default::default()
        };
        assert!(render(&big_seed, &store).is_err());
    }

    #[test]
    fn test_draw_command_count() {
        let poster = render(&scenario(), &PaletteStore::new()).unwrap();
        assert_eq!(poster.draw_commands().len(), 3 * crate::types::BLUR_COPIES);
    }

    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..100 {
            assert!(limits::SEED.contains(&generate_random_seed()));
        }
    }
}
