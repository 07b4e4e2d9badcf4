//! Fixed-step curve sampling.
//!
//! Every curve is sampled by starting at `start` and adding [`STEP`] while
//! the running value stays `<= end`. The running value accumulates floating
//! point error, so the last sample may sit slightly before `end` and the
//! sample count may differ by one from `(end - start) / STEP + 1`.
//!
//! Explicit curves (`y` of `x`) evaluate each point into an [`Evaluation`];
//! points that fail are dropped from the series and sampling carries on.
//! Parametric curves never drop points.

use tracing::{debug, trace, warn};

use crate::curve::{ExpLogKind, SecondOrderKind, TrigKind};
use crate::error::CurveError;
use crate::geom::Point;
use crate::series::Series;

/// Distance between consecutive sample positions.
pub const STEP: f64 = 0.01;

/// Outcome of evaluating a curve at a single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// The curve has a finite value here.
    Value(f64),
    /// The position produces no sample.
    Skipped(SkipReason),
}

/// Why a position produced no sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The argument lies outside the function's domain, e.g. `ln` of a
    /// non-positive value.
    OutOfDomain,
    /// Evaluation produced an infinite or NaN value, e.g. division by zero.
    NonFinite,
}

impl Evaluation {
    /// Wrap a raw value, rejecting infinities and NaN.
    pub fn checked(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Skipped(SkipReason::NonFinite)
        }
    }

    /// The value, if the position produced one.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }
}

impl TrigKind {
    /// Evaluate `A + B·f(C·x)` for this kind.
    pub fn evaluate(self, a: f64, b: f64, c: f64, x: f64) -> Evaluation {
        let arg = c * x;
        Evaluation::checked(match self {
            Self::Sin => a + b * arg.sin(),
            Self::Cos => a + b * arg.cos(),
            Self::Tan => a + b * arg.tan(),
            Self::Ctan => a + b / arg.tan(),
        })
    }
}

impl ExpLogKind {
    /// Evaluate `A·e^(B·x)` or `A·ln(B·x)` for this kind.
    pub fn evaluate(self, a: f64, b: f64, x: f64) -> Evaluation {
        match self {
            Self::Exp => Evaluation::checked(a * (b * x).exp()),
            Self::Log => {
                let arg = b * x;
                if arg <= 0.0 {
                    return Evaluation::Skipped(SkipReason::OutOfDomain);
                }
                Evaluation::checked(a * arg.ln())
            }
        }
    }
}

/// Iterator over sample positions from `start` while `<= end`.
#[derive(Debug, Clone)]
pub(crate) struct Steps {
    next: f64,
    end: f64,
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.end {
            return None;
        }
        let current = self.next;
        self.next += STEP;
        if self.next == current {
            // Past ~2.5e14 the step is below one ULP and positions stop advancing.
            warn!(x = current, "sampling step lost to float precision, stopping");
            self.end = f64::NEG_INFINITY;
            return None;
        }
        Some(current)
    }
}

/// Sample positions for `[start, end]`.
///
/// Non-finite bounds yield no positions; an infinite `end` would otherwise
/// never terminate. Iteration also stops once adding [`STEP`] no longer
/// changes the position.
pub(crate) fn steps(start: f64, end: f64) -> Steps {
    if !start.is_finite() || !end.is_finite() {
        warn!(start, end, "non-finite sampling bounds, producing no samples");
        return Steps {
            next: 1.0,
            end: 0.0,
        };
    }
    Steps { next: start, end }
}

/// Sample an explicit `y = f(x)` curve, dropping skipped positions.
fn explicit(
    name: impl Into<String>,
    start: f64,
    end: f64,
    function: impl Fn(f64) -> Evaluation,
) -> Series {
    let name = name.into();
    let mut points = Vec::new();
    let mut skipped = 0usize;
    for x in steps(start, end) {
        match function(x) {
            Evaluation::Value(y) => points.push(Point::new(x, y)),
            Evaluation::Skipped(reason) => {
                skipped += 1;
                trace!(series = %name, x, ?reason, "skipped sample");
            }
        }
    }
    debug!(series = %name, samples = points.len(), skipped, "sampled curve");
    Series::new(name, points)
}

/// Sample a parametric curve `(x(t), y(t))` over `t` in `[start, end]`.
///
/// Samples are emitted in `t` order and are not sorted by `x`.
pub fn sample_parametric(
    name: impl Into<String>,
    x_of_t: impl Fn(f64) -> f64,
    y_of_t: impl Fn(f64) -> f64,
    start: f64,
    end: f64,
) -> Series {
    let name = name.into();
    let points: Vec<Point> = steps(start, end)
        .map(|t| Point::new(x_of_t(t), y_of_t(t)))
        .collect();
    debug!(series = %name, samples = points.len(), "sampled parametric curve");
    Series::new(name, points)
}

/// Sample a trigonometric curve of a known kind.
pub fn trigonometric(kind: TrigKind, a: f64, b: f64, c: f64, start: f64, end: f64) -> Series {
    explicit(format!("{kind} function"), start, end, |x| {
        kind.evaluate(a, b, c, x)
    })
}

/// Sample a second-order curve of a known kind.
///
/// Ellipse and circle are traced parametrically with `t` in `[start, end]`.
pub fn second_order(
    kind: SecondOrderKind,
    a: f64,
    b: f64,
    c: f64,
    start: f64,
    end: f64,
) -> Series {
    match kind {
        SecondOrderKind::Parabola => explicit(format!("{kind} function"), start, end, |x| {
            Evaluation::checked(a * x * x + b * x + c)
        }),
        SecondOrderKind::Hyperbola => explicit(format!("{kind} function"), start, end, |x| {
            Evaluation::checked(a / x)
        }),
        SecondOrderKind::Ellipse => {
            sample_parametric("Ellipse", |t| a * t.cos(), |t| b * t.sin(), start, end)
        }
        SecondOrderKind::Circle => {
            sample_parametric("Circle", |t| a * t.cos(), |t| a * t.sin(), start, end)
        }
    }
}

/// Sample an exponential or logarithmic curve of a known kind.
pub fn exp_log(kind: ExpLogKind, a: f64, b: f64, start: f64, end: f64) -> Series {
    explicit(format!("{kind} function"), start, end, |x| {
        kind.evaluate(a, b, x)
    })
}

/// Sample a trigonometric curve named by a kind string (`sin`, `cos`, `tan`,
/// `ctan`, any case).
pub fn sample_trigonometric(
    kind: &str,
    a: f64,
    b: f64,
    c: f64,
    start: f64,
    end: f64,
) -> Result<Series, CurveError> {
    Ok(trigonometric(kind.parse()?, a, b, c, start, end))
}

/// Sample a second-order curve named by a kind string (`parabola`,
/// `hyperbola`, `ellipse`, `circle`, any case).
pub fn sample_second_order(
    kind: &str,
    a: f64,
    b: f64,
    c: f64,
    start: f64,
    end: f64,
) -> Result<Series, CurveError> {
    Ok(second_order(kind.parse()?, a, b, c, start, end))
}

/// Sample an exponential or logarithmic curve named by a kind string (`exp`,
/// `log`, any case).
pub fn sample_exp_log(
    kind: &str,
    a: f64,
    b: f64,
    start: f64,
    end: f64,
) -> Result<Series, CurveError> {
    Ok(exp_log(kind.parse()?, a, b, start, end))
}
