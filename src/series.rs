//! Sampled curve storage.

use crate::geom::Point;
use crate::view::Viewport;

/// A named, ordered sequence of samples for one plotted curve.
///
/// Sample order is the drawn path. Samples are fixed at construction;
/// parametric curves are not sorted by X.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<Point>,
    bounds: Option<Viewport>,
}

impl Series {
    /// Create a series from its samples.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        let bounds = compute_bounds(&points);
        Self {
            name: name.into(),
            points,
            bounds,
        }
    }

    /// Build a series from an iterator of points.
    pub fn from_iter_points<I>(name: impl Into<String>, iter: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::new(name, iter.into_iter().collect())
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the series name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Access all samples in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Access a single sample by index.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounds of the finite samples, if any.
    pub fn bounds(&self) -> Option<Viewport> {
        self.bounds
    }
}

fn compute_bounds(points: &[Point]) -> Option<Viewport> {
    let mut finite = points
        .iter()
        .copied()
        .filter(|point| point.x.is_finite() && point.y.is_finite());
    let mut bounds = Viewport::around(finite.next()?);
    for point in finite {
        bounds.expand_to_include(point);
    }
    Some(bounds)
}
