//! Layer placement.
//!
//! Each layer draws, in order: center x and y, radius, palette colour,
//! base alpha, then one jitter pair per blur copy. Keeping that order fixed
//! is what makes a seed reproduce the same poster.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PosterError, Result};
use crate::types::{BlobParams, Colour, Layer, Point, BLUR_COPIES};

use super::blob;

/// Largest per-axis offset of a blur copy.
pub const JITTER: f64 = 0.005;

/// Compose `n` layers over the palette.
///
/// The base radius is checked first; after that an empty palette yields no
/// layers.
pub fn compose_layers<R: Rng + ?Sized>(
    n: usize,
    palette: &[Colour],
    radius_base: f64,
    params: BlobParams,
    rng: &mut R,
) -> Result<Vec<Layer>> {
    if !(radius_base > 0.0) || !radius_base.is_finite() {
        return Err(PosterError::invalid(
            format!("base radius {} must be positive and finite", radius_base),
            "Use a base radius between 0.05 and 0.8",
        ));
    }
    if palette.is_empty() {
        return Ok(Vec::new());
    }

    let mut layers = Vec::with_capacity(n);
    for _ in 0..n {
        let center = Point::new(rng.gen(), rng.gen());
        let radius = rng.gen_range(radius_base * 0.5..=radius_base * 1.5);
        let blob = blob(center, radius, params)?;

        // Non-empty palette checked above.
        let colour = palette.choose(rng).copied().unwrap_or_default();
        let alpha = rng.gen_range(0.3..=0.6);

        let mut jitter = [(0.0, 0.0); BLUR_COPIES];
        for offset in &mut jitter {
            *offset = (rng.gen_range(-JITTER..=JITTER), rng.gen_range(-JITTER..=JITTER));
        }

        layers.push(Layer {
            blob,
            colour,
            alpha,
            jitter,
        });
    }

    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn palette() -> Vec<Colour> {
        vec![Colour::new(0.4, 0.7, 1.0), Colour::new(1.0, 0.8, 0.2)]
    }

    fn compose(n: usize, seed: u64) -> Vec<Layer> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        compose_layers(n, &palette(), 0.3, BlobParams::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_layer_count() {
        assert_eq!(compose(12, 1).len(), 12);
        assert!(compose(0, 1).is_empty());
    }

    #[test]
    fn test_layer_ranges() {
        for layer in compose(50, 3) {
            let c = layer.blob.center;
            assert!((0.0..1.0).contains(&c.x) && (0.0..1.0).contains(&c.y));
            assert!((0.15..=0.45).contains(&layer.blob.radius));
            assert!((0.3..=0.6).contains(&layer.alpha));
            assert!(palette().contains(&layer.colour));
            assert!(layer
                .jitter
                .iter()
                .all(|(dx, dy)| dx.abs() <= JITTER && dy.abs() <= JITTER));
            assert_eq!(layer.blob.len(), 200);
        }
    }

    #[test]
    fn test_same_seed_same_layers() {
        assert_eq!(compose(5, 42), compose(5, 42));
        assert_ne!(compose(5, 42), compose(5, 43));
    }

    #[test]
    fn test_rejects_bad_radius_base() {
        for radius in [-0.3, 0.0, f64::NAN, f64::INFINITY] {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let result = compose_layers(3, &palette(), radius, BlobParams::default(), &mut rng);
            assert!(
                matches!(result, Err(PosterError::InvalidParameter { .. })),
                "radius {}",
                radius
            );
        }

        // Checked before the empty-palette shortcut.
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(compose_layers(3, &[], -1.0, BlobParams::default(), &mut rng).is_err());
    }

    #[test]
    fn test_empty_palette_yields_no_layers() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let layers = compose_layers(8, &[], 0.3, BlobParams::default(), &mut rng).unwrap();
        assert!(layers.is_empty());
    }
}
