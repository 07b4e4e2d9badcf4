//! Host-owned collection of plotted series.

use tracing::debug;

use crate::config::Tolerances;
use crate::geom::Point;
use crate::intersection::{IntersectionResult, find_intersection};
use crate::series::Series;
use crate::view::Viewport;

/// Ordered list of plotted series.
///
/// Series are appended and never modified in place; the whole collection
/// can be cleared. The intersection scan borrows it as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SeriesCollection {
    tolerances: Tolerances,
    series: Vec<Series>,
}

impl SeriesCollection {
    /// Create an empty collection with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection probing with the given tolerances.
    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        Self {
            tolerances,
            series: Vec::new(),
        }
    }

    /// Access the tolerances used by [`Self::probe`].
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Access all series in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Access a series by index.
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Append a series and return its index.
    ///
    /// The series is renamed to `"<name> <index>"` so that repeated curves of
    /// the same kind stay distinguishable.
    pub fn add(&mut self, series: Series) -> usize {
        let index = self.series.len();
        let name = format!("{} {index}", series.name());
        debug!(series = %name, samples = series.len(), "added series");
        self.series.push(series.with_name(name));
        index
    }

    /// Remove every series.
    pub fn clear(&mut self) {
        debug!(removed = self.series.len(), "cleared series");
        self.series.clear();
    }

    /// Find an intersection near `query` among the current series.
    pub fn probe(&self, query: Point) -> IntersectionResult {
        find_intersection(&self.series, query, &self.tolerances)
    }

    /// Compute bounds across all series.
    pub fn data_bounds(&self) -> Option<Viewport> {
        let mut bounds: Option<Viewport> = None;
        for series in &self.series {
            if let Some(next) = series.bounds() {
                bounds = Some(match bounds {
                    None => next,
                    Some(existing) => Viewport::union(existing, next)?,
                });
            }
        }
        bounds
    }
}

impl Extend<Series> for SeriesCollection {
    fn extend<T: IntoIterator<Item = Series>>(&mut self, iter: T) {
        for series in iter {
            self.add(series);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    fn series(name: &str, points: &[(f64, f64)]) -> Series {
        Series::from_iter_points(name, points.iter().copied().map(Point::from))
    }

    #[test]
    fn add_appends_index_to_name() {
        let mut collection = SeriesCollection::new();
        assert_eq!(collection.add(series("sin function", &[(0.0, 0.0)])), 0);
        assert_eq!(collection.add(series("sin function", &[(0.0, 0.0)])), 1);
        assert_eq!(collection.series()[0].name(), "sin function 0");
        assert_eq!(collection.series()[1].name(), "sin function 1");
    }

    #[test]
    fn clear_empties_and_restarts_indices() {
        let mut collection = SeriesCollection::new();
        collection.extend([series("a", &[(0.0, 0.0)]), series("b", &[(0.0, 0.0)])]);
        assert_eq!(collection.len(), 2);
        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.data_bounds(), None);
        collection.add(series("c", &[(1.0, 1.0)]));
        assert_eq!(collection.get(0).map(Series::name), Some("c 0"));
    }

    #[test]
    fn probe_uses_collection_tolerances() {
        let mut collection = SeriesCollection::with_tolerances(Tolerances {
            coincidence: 0.01,
            proximity: 1.0,
        });
        collection.add(series("a", &[(0.0, 0.0)]));
        collection.add(series("b", &[(0.0, 0.0)]));
        let query = Point::new(0.5, 0.5);
        assert!(collection.probe(query).is_found());
        assert!(
            !find_intersection(collection.series(), query, &Tolerances::default()).is_found()
        );
    }

    #[test]
    fn data_bounds_union_all_series() {
        let mut collection = SeriesCollection::new();
        collection.add(series("a", &[(0.0, 0.0), (1.0, 2.0)]));
        collection.add(series("empty", &[]));
        collection.add(series("b", &[(-3.0, 1.0)]));
        let bounds = collection.data_bounds().unwrap();
        assert_eq!(bounds.x, Range::new(-3.0, 1.0));
        assert_eq!(bounds.y, Range::new(0.0, 2.0));
    }
}
