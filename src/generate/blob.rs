//! Rose-curve outline synthesis.

use std::f64::consts::TAU;

use crate::error::{PosterError, Result};
use crate::types::{Blob, BlobParams, Point};

/// Sample a closed petal outline around `center`.
///
/// Angles are spaced evenly over `[0, 2π)` without repeating the start, and
/// the radius at angle θ is `radius * (1 + wobble * (sin(θ * petals) + 0.5))`.
pub fn blob(center: Point, radius: f64, params: BlobParams) -> Result<Blob> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(PosterError::invalid(
            format!("blob radius {} must be positive", radius),
            "Use a radius greater than zero",
        ));
    }
    if params.point_count == 0 {
        return Err(PosterError::invalid(
            "blob needs at least one point",
            "Use a point count of 1 or more (200 by default)",
        ));
    }

    let step = TAU / params.point_count as f64;
    let points = (0..params.point_count)
        .map(|k| {
            let theta = step * k as f64;
            let r = radius * params.multiplier(theta);
            Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect();

    Ok(Blob::new(center, radius, params, points))
}
