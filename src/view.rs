//! Data ranges and bounding boxes.

use crate::geom::Point;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }
}

/// Axis-aligned bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Degenerate viewport covering a single point.
    pub fn around(point: Point) -> Self {
        Self::new(Range::new(point.x, point.x), Range::new(point.y, point.y))
    }

    /// Grow the viewport so that it covers `point`.
    pub fn expand_to_include(&mut self, point: Point) {
        self.x.expand_to_include(point.x);
        self.y.expand_to_include(point.y);
    }

    /// Union two viewports if all bounds are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        Some(Self::new(Range::union(a.x, b.x)?, Range::union(a.y, b.y)?))
    }
}
