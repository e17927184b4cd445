//! Point and blob types.
//!
//! A blob is a closed polygon approximating a rose curve. Points live in
//! normalized poster space with y pointing up.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in poster space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Shape parameters shared by every blob on a poster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlobParams {
    /// Number of outline samples.
    pub point_count: usize,
    /// Lobe amplitude relative to the radius.
    pub wobble: f64,
    /// Number of lobes.
    pub petals: u32,
}

impl BlobParams {
    pub const DEFAULT_POINT_COUNT: usize = 200;

    pub fn new(wobble: f64, petals: u32) -> Self {
        Self {
            point_count: Self::DEFAULT_POINT_COUNT,
            wobble,
            petals,
        }
    }

    /// Radius multiplier at angle `theta`.
    pub fn multiplier(&self, theta: f64) -> f64 {
        1.0 + self.wobble * ((theta * self.petals as f64).sin() + 0.5)
    }
}

impl Default for BlobParams {
    fn default() -> Self {
        Self::new(0.15, 5)
    }
}

/// A closed outline. The last point implicitly connects to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blob {
    pub center: Point,
    pub radius: f64,
    pub params: BlobParams,
    points: Vec<Point>,
}

impl Blob {
    pub(crate) fn new(center: Point, radius: f64, params: BlobParams, points: Vec<Point>) -> Self {
        Self {
            center,
            radius,
            params,
            points,
        }
    }

    /// Outline points in angular order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A copy of the outline shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Vec<Point> {
        self.points.iter().map(|p| p.translate(dx, dy)).collect()
    }

    /// Smallest and largest possible distance of an outline point from the center.
    pub fn radius_bounds(&self) -> (f64, f64) {
        let w = self.params.wobble;
        let a = self.radius * (1.0 - 0.5 * w);
        let b = self.radius * (1.0 + 1.5 * w);
        (a.min(b), a.max(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translate() {
        let p = Point::new(0.5, 0.5).translate(0.1, -0.2);
        assert!((p.x - 0.6).abs() < 1e-12);
        assert!((p.y - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_multiplier_with_zero_wobble() {
        let params = BlobParams::new(0.0, 5);
        assert_eq!(params.multiplier(1.234), 1.0);
    }

    #[test]
    fn test_default_params() {
        let params = BlobParams::default();
        assert_eq!(params.point_count, 200);
        assert_eq!(params.wobble, 0.15);
        assert_eq!(params.petals, 5);
    }

    #[test]
    fn test_radius_bounds_negative_wobble() {
        let blob = Blob::new(Point::default(), 1.0, BlobParams::new(-0.2, 3), vec![]);
        let (lo, hi) = blob.radius_bounds();
        assert!(lo <= hi);
        assert!((lo - 0.7).abs() < 1e-12);
        assert!((hi - 1.1).abs() < 1e-12);
    }
}
