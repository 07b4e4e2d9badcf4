//! Scene files: a list of curves plus intersection tolerances, in RON.
//!
//! ```text
//! (
//!     tolerances: (coincidence: 0.01, proximity: 0.05),
//!     curves: [
//!         Trigonometric(kind: "sin", a: 0.0, b: 1.0, c: 1.0, start: -3.14, end: 3.14),
//!         SecondOrder(kind: "circle", a: 1.0, start: 0.0, end: 6.3),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collection::SeriesCollection;
use crate::config::Tolerances;
use crate::curve::Curve;
use crate::error::CurveError;

/// A set of curves to plot together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Intersection thresholds; defaults apply when omitted.
    #[serde(default)]
    pub tolerances: Tolerances,
    /// Curves in plotting order.
    #[serde(default)]
    pub curves: Vec<Curve>,
}

impl Scene {
    /// Parse a scene from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, CurveError> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CurveError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CurveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_ron_str(&text)?;
        info!(path = %path.display(), curves = scene.curves.len(), "loaded scene");
        Ok(scene)
    }

    /// Sample every curve into a fresh collection.
    pub fn build(&self) -> SeriesCollection {
        let mut collection = SeriesCollection::with_tolerances(self.tolerances);
        collection.extend(self.curves.iter().map(Curve::sample));
        collection
    }
}
