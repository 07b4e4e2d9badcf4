//! Geometric primitives in data space.
//!
//! Both curve samples and query points are plain data-space points. Mapping
//! a pointer position into data space is the host's job.

use serde::{Deserialize, Serialize};

/// A point in data space.
///
/// Used for curve samples and for the pointer position being queried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Check whether both coordinates lie strictly within `tolerance` of `other`.
    ///
    /// Each axis is tested on its own; this is a box test, not a radius test.
    pub fn coincides_with(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn coincidence_checks_each_axis_strictly() {
        let a = Point::new(1.0, 1.0);
        assert!(a.coincides_with(Point::new(1.005, 0.995), 0.01));
        assert!(!a.coincides_with(Point::new(1.0, 1.02), 0.01));
        assert!(!a.coincides_with(Point::new(1.02, 1.0), 0.01));
        // Diagonal distance exceeds the tolerance but each axis is inside it.
        assert!(a.coincides_with(Point::new(1.009, 1.009), 0.01));
    }
}
