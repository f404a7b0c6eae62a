//! Easing curves.
//!
//! Maps linear progress `t ∈ [0, 1]` onto eased progress. The named power
//! curves match the ones the entrance timeline was designed with; the
//! cubic-bézier variant covers the CSS presets in the design tokens.

use serde::{Deserialize, Serialize};

/// An easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing; used by scroll-scrubbed effects.
    Linear,
    /// Cubic deceleration: `1 - (1 - t)^3`.
    Power2Out,
    /// Quartic deceleration: `1 - (1 - t)^4`.
    #[default]
    Power3Out,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Apply the curve to linear progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }

    /// CSS `transition-timing-function` equivalent.
    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            // Closest standard approximations of the power curves.
            Self::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
            Self::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }
}

/// One coordinate of a cubic bézier with endpoints fixed at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
///
/// Newton's method first, bisection when the slope flattens out. CSS keeps
/// `x1`/`x2` inside `[0, 1]`, so x(s) is monotone and bisection always
/// converges.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
