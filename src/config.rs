//! Intersection detection thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds used by the intersection scan.
///
/// Both are absolute distances in data units and do not follow the host's
/// zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Per-axis distance under which samples from two series coincide.
    pub coincidence: f64,
    /// Distance from the query point under which a coincidence is reported.
    pub proximity: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            coincidence: 0.01,
            proximity: 0.05,
        }
    }
}
