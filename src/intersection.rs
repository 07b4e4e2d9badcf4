//! Proximity-based intersection detection.
//!
//! Two series are considered to meet wherever one of their samples lies
//! within the coincidence tolerance of one of the other's samples on both
//! axes. A meeting point is reported when it is within the proximity
//! threshold of the query point.
//!
//! The scan is first-match, not best-match: series pairs `(i, j)` with
//! `i < j` are visited in ascending order, then samples of `i`, then samples
//! of `j`, and the first accepted sample ends the scan. Cost is quadratic in
//! both series count and samples per series.

use std::fmt;

use tracing::debug;

use crate::config::Tolerances;
use crate::geom::Point;
use crate::series::Series;

/// A coincidence between two series accepted near a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The query point.
    pub query: Point,
    /// The matched sample of the lower-indexed series.
    pub point: Point,
    /// Indices of the two series, lower index first.
    pub series: (usize, usize),
}

/// Outcome of an intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult {
    /// No pair of series meets near the query point.
    None {
        /// The query point.
        query: Point,
    },
    /// Two series meet near the query point.
    Found(Intersection),
}

impl IntersectionResult {
    /// Label shown before any query has been made.
    pub fn default_label() -> &'static str {
        "Intersection: None"
    }

    /// The query point this result answers.
    pub fn query(&self) -> Point {
        match self {
            Self::None { query } => *query,
            Self::Found(intersection) => intersection.query,
        }
    }

    /// The intersection, if one was found.
    pub fn intersection(&self) -> Option<&Intersection> {
        match self {
            Self::None { .. } => None,
            Self::Found(intersection) => Some(intersection),
        }
    }

    /// Check whether an intersection was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for IntersectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query();
        write!(f, "X: {:.2}, Y: {:.2}", query.x, query.y)?;
        if let Self::Found(intersection) = self {
            write!(
                f,
                " (Intersection: {:.2}, {:.2})",
                intersection.point.x, intersection.point.y
            )?;
        }
        Ok(())
    }
}

/// Find the first coincidence between two distinct series near `query`.
///
/// `series` is a read-only snapshot; nothing is retained after the call.
pub fn find_intersection(
    series: &[Series],
    query: Point,
    tolerances: &Tolerances,
) -> IntersectionResult {
    for (i, first) in series.iter().enumerate() {
        for (j, second) in series.iter().enumerate().skip(i + 1) {
            if let Some(point) = first_match(first, second, query, tolerances) {
                debug!(
                    first = first.name(),
                    second = second.name(),
                    x = point.x,
                    y = point.y,
                    "intersection near query point"
                );
                return IntersectionResult::Found(Intersection {
                    query,
                    point,
                    series: (i, j),
                });
            }
        }
    }
    IntersectionResult::None { query }
}

fn first_match(
    first: &Series,
    second: &Series,
    query: Point,
    tolerances: &Tolerances,
) -> Option<Point> {
    for &a in first.points() {
        for &b in second.points() {
            if a.coincides_with(b, tolerances.coincidence)
                && query.distance(a) < tolerances.proximity
            {
                return Some(a);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, points: &[(f64, f64)]) -> Series {
        Series::from_iter_points(name, points.iter().copied().map(Point::from))
    }

    #[test]
    fn empty_and_single_collections_never_match() {
        let query = Point::new(0.0, 0.0);
        let tolerances = Tolerances::default();
        assert_eq!(
            find_intersection(&[], query, &tolerances),
            IntersectionResult::None { query }
        );
        let single = [line("a", &[(0.0, 0.0), (0.0, 0.0)])];
        assert_eq!(
            find_intersection(&single, query, &tolerances),
            IntersectionResult::None { query }
        );
    }

    #[test]
    fn identical_series_match_at_query_sample() {
        let samples = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)];
        let series = [line("a", &samples), line("b", &samples)];
        let query = Point::new(1.0, 1.0);
        let result = find_intersection(&series, query, &Tolerances::default());
        assert_eq!(
            result,
            IntersectionResult::Found(Intersection {
                query,
                point: Point::new(1.0, 1.0),
                series: (0, 1),
            })
        );
    }

    #[test]
    fn disjoint_series_never_match() {
        let series = [
            line("a", &[(0.0, 0.0), (1.0, 0.0)]),
            line("b", &[(0.0, 1.0), (1.0, 1.0)]),
        ];
        for query in [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.5, 0.5)] {
            assert!(!find_intersection(&series, query, &Tolerances::default()).is_found());
        }
    }

    #[test]
    fn coincidence_far_from_query_is_ignored() {
        let series = [line("a", &[(5.0, 5.0)]), line("b", &[(5.0, 5.0)])];
        let result = find_intersection(&series, Point::new(5.06, 5.0), &Tolerances::default());
        assert!(!result.is_found());
        let result = find_intersection(&series, Point::new(5.04, 5.0), &Tolerances::default());
        assert!(result.is_found());
    }

    #[test]
    fn reports_first_match_not_closest() {
        // Both samples of "a" coincide with "b" and are within reach of the
        // query; the earlier sample wins even though the later one is closer.
        let series = [
            line("a", &[(0.0, 0.0), (0.03, 0.0)]),
            line("b", &[(0.0, 0.0), (0.03, 0.0)]),
        ];
        let result = find_intersection(&series, Point::new(0.03, 0.0), &Tolerances::default());
        assert_eq!(result.intersection().unwrap().point, Point::new(0.0, 0.0));
    }

    #[test]
    fn pairs_are_visited_in_index_order() {
        let series = [
            line("a", &[(9.0, 9.0)]),
            line("b", &[(0.0, 0.0)]),
            line("c", &[(0.0, 0.0)]),
            line("d", &[(0.001, 0.0)]),
        ];
        let result = find_intersection(&series, Point::new(0.0, 0.0), &Tolerances::default());
        assert_eq!(result.intersection().unwrap().series, (1, 2));
    }

    #[test]
    fn reported_point_comes_from_lower_indexed_series() {
        let series = [line("a", &[(0.004, 0.004)]), line("b", &[(0.0, 0.0)])];
        let result = find_intersection(&series, Point::new(0.0, 0.0), &Tolerances::default());
        assert_eq!(result.intersection().unwrap().point, Point::new(0.004, 0.004));
    }

    #[test]
    fn custom_tolerances_widen_detection() {
        let series = [line("a", &[(0.0, 0.0)]), line("b", &[(0.05, 0.0)])];
        let query = Point::new(0.0, 0.0);
        assert!(!find_intersection(&series, query, &Tolerances::default()).is_found());
        let wide = Tolerances {
            coincidence: 0.1,
            proximity: 0.05,
        };
        assert!(find_intersection(&series, query, &wide).is_found());
    }

    #[test]
    fn labels_use_two_decimals() {
        let query = Point::new(1.234, -0.5);
        assert_eq!(
            IntersectionResult::None { query }.to_string(),
            "X: 1.23, Y: -0.50"
        );
        let found = IntersectionResult::Found(Intersection {
            query,
            point: Point::new(1.2, -0.456),
            series: (0, 1),
        });
        assert_eq!(found.to_string(), "X: 1.23, Y: -0.50 (Intersection: 1.20, -0.46)");
        assert_eq!(IntersectionResult::default_label(), "Intersection: None");
    }
}
