//! Curve families and their kinds.
//!
//! Each family is a closed set of kinds. Kind names are matched without
//! regard to ASCII case, so `"SIN"` and `"sin"` select the same curve.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::sampler;
use crate::series::Series;

/// Curve family, used to scope kind lookups and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// `A + B·f(C·x)` for a trigonometric `f`.
    Trigonometric,
    /// Parabola, hyperbola, ellipse and circle.
    SecondOrder,
    /// Exponential and natural logarithm.
    ExpLog,
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trigonometric => "trigonometric",
            Self::SecondOrder => "second order",
            Self::ExpLog => "exp/log",
        })
    }
}

macro_rules! curve_kind {
    (
        $(#[$meta:meta])*
        $name:ident, $family:expr, {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All kinds of this family, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical lowercase name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CurveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| CurveError::InvalidCurveKind {
                        family: $family,
                        kind: s.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = CurveError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                kind.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

curve_kind! {
    /// Trigonometric kinds.
    TrigKind, CurveFamily::Trigonometric, {
        /// `A + B·sin(C·x)`.
        Sin => "sin",
        /// `A + B·cos(C·x)`.
        Cos => "cos",
        /// `A + B·tan(C·x)`.
        Tan => "tan",
        /// `A + B / tan(C·x)`.
        Ctan => "ctan",
    }
}

curve_kind! {
    /// Second-order curve kinds.
    SecondOrderKind, CurveFamily::SecondOrder, {
        /// `A·x² + B·x + C`.
        Parabola => "parabola",
        /// `A / x`.
        Hyperbola => "hyperbola",
        /// Parametric `(A·cos t, B·sin t)`.
        Ellipse => "ellipse",
        /// Parametric `(A·cos t, A·sin t)`.
        Circle => "circle",
    }
}

curve_kind! {
    /// Exponential and logarithmic kinds.
    ExpLogKind, CurveFamily::ExpLog, {
        /// `A·e^(B·x)`.
        Exp => "exp",
        /// `A·ln(B·x)`.
        Log => "log",
    }
}

impl SecondOrderKind {
    /// Whether the kind is sampled over a parameter `t` instead of `x`.
    pub fn is_parametric(self) -> bool {
        matches!(self, Self::Ellipse | Self::Circle)
    }
}

/// A complete curve description: family, kind, parameters and interval.
///
/// `start`/`end` bound `x` for explicit curves and `t` (radians) for the
/// parametric ellipse and circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Trigonometric function of `x`.
    Trigonometric {
        /// Function kind.
        kind: TrigKind,
        /// Vertical offset.
        a: f64,
        /// Amplitude.
        b: f64,
        /// Angular frequency in radians.
        c: f64,
        /// First sampled value.
        start: f64,
        /// Inclusive upper bound.
        end: f64,
    },
    /// Second-order curve.
    SecondOrder {
        /// Curve kind.
        kind: SecondOrderKind,
        /// First coefficient.
        a: f64,
        /// Second coefficient, unused by circle and hyperbola.
        #[serde(default)]
        b: f64,
        /// Constant term, used by parabola only.
        #[serde(default)]
        c: f64,
        /// First sampled value.
        start: f64,
        /// Inclusive upper bound.
        end: f64,
    },
    /// Exponential or logarithmic function of `x`.
    ExpLog {
        /// Function kind.
        kind: ExpLogKind,
        /// Multiplier.
        a: f64,
        /// Factor applied to `x`.
        b: f64,
        /// First sampled value.
        start: f64,
        /// Inclusive upper bound.
        end: f64,
    },
}

impl Curve {
    /// Family this curve belongs to.
    pub fn family(&self) -> CurveFamily {
        match self {
            Self::Trigonometric { .. } => CurveFamily::Trigonometric,
            Self::SecondOrder { .. } => CurveFamily::SecondOrder,
            Self::ExpLog { .. } => CurveFamily::ExpLog,
        }
    }

    /// Sample the curve at the fixed step.
    pub fn sample(&self) -> Series {
        match *self {
            Self::Trigonometric {
                kind,
                a,
                b,
                c,
                start,
                end,
            } => sampler::trigonometric(kind, a, b, c, start, end),
            Self::SecondOrder {
                kind,
                a,
                b,
                c,
                start,
                end,
            } => sampler::second_order(kind, a, b, c, start, end),
            Self::ExpLog {
                kind,
                a,
                b,
                start,
                end,
            } => sampler::exp_log(kind, a, b, start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("SIN".parse::<TrigKind>().unwrap(), TrigKind::Sin);
        assert_eq!("cTaN".parse::<TrigKind>().unwrap(), TrigKind::Ctan);
        assert_eq!(
            "Circle".parse::<SecondOrderKind>().unwrap(),
            SecondOrderKind::Circle
        );
        assert_eq!("LOG".parse::<ExpLogKind>().unwrap(), ExpLogKind::Log);
    }

    #[test]
    fn unknown_kind_reports_family_and_input() {
        let err = "parabol".parse::<SecondOrderKind>().unwrap_err();
        match &err {
            CurveError::InvalidCurveKind { family, kind } => {
                assert_eq!(*family, CurveFamily::SecondOrder);
                assert_eq!(kind, "parabol");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "unknown second order function type: parabol"
        );
    }

    #[test]
    fn kinds_do_not_cross_families() {
        assert!("sin".parse::<ExpLogKind>().is_err());
        assert!("exp".parse::<TrigKind>().is_err());
        assert!(" sin".parse::<TrigKind>().is_err());
    }

    #[test]
    fn every_kind_roundtrips_through_its_name() {
        for kind in TrigKind::ALL {
            assert_eq!(kind.as_str().parse::<TrigKind>().unwrap(), *kind);
        }
        for kind in SecondOrderKind::ALL {
            assert_eq!(kind.as_str().parse::<SecondOrderKind>().unwrap(), *kind);
        }
        for kind in ExpLogKind::ALL {
            assert_eq!(kind.as_str().parse::<ExpLogKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn only_ellipse_and_circle_are_parametric() {
        assert!(SecondOrderKind::Ellipse.is_parametric());
        assert!(SecondOrderKind::Circle.is_parametric());
        assert!(!SecondOrderKind::Parabola.is_parametric());
        assert!(!SecondOrderKind::Hyperbola.is_parametric());
    }

    #[test]
    fn curve_sample_dispatches_by_family() {
        let curve = Curve::ExpLog {
            kind: ExpLogKind::Exp,
            a: 2.0,
            b: 0.0,
            start: 0.0,
            end: 0.1,
        };
        assert_eq!(curve.family(), CurveFamily::ExpLog);
        let series = curve.sample();
        assert_eq!(series.name(), "exp function");
        assert!(series.points().iter().all(|point| point.y == 2.0));
    }
}
