//! curveplot samples trigonometric, second-order and exponential/logarithmic
//! curves at a fixed step and finds where plotted curves meet near a cursor.
//! Rendering and input handling belong to the host application.

#![forbid(unsafe_code)]

pub mod collection;
pub mod config;
pub mod curve;
pub mod error;
pub mod geom;
pub mod intersection;
pub mod sampler;
pub mod scene;
pub mod series;
pub mod view;

pub use collection::SeriesCollection;
pub use config::Tolerances;
pub use curve::{Curve, CurveFamily, ExpLogKind, SecondOrderKind, TrigKind};
pub use error::CurveError;
pub use geom::Point;
pub use intersection::{Intersection, IntersectionResult, find_intersection};
pub use sampler::{
    Evaluation, STEP, SkipReason, sample_exp_log, sample_parametric, sample_second_order,
    sample_trigonometric,
};
pub use scene::Scene;
pub use series::Series;
pub use view::{Range, Viewport};
