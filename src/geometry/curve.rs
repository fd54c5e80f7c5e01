use std::f64::consts::TAU;
use std::fmt::Write as _;

use crate::foundation::core::{Point, Rect};
use crate::foundation::math::round_half_up;
use crate::params::DailyParameters;

/// Segments per curve; a curve has `CURVE_STEPS + 1` points.
pub const CURVE_STEPS: usize = 90;

/// Angular inset at both ends of the sweep, keeping the wrap seam out of view.
pub const SEAM_GAP: f64 = 0.12;

/// Which curve family of a fold to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Layer {
    /// Twisted unit-circle orbit.
    Outer,
    /// Radius-modulated structural curve, smaller and slower.
    Inner,
}

/// One fold's curve at one frame, as an ordered point sequence closed back to its start.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClosedCurve {
    points: Vec<Point>,
}

impl ClosedCurve {
    /// Build a curve from points; the closing segment is implicit.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points in drawing order, without the repeated start point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First point, which the closing segment returns to.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Axis-aligned bounds of the points. Empty curves give [`Rect::ZERO`].
    pub fn bounds(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
    }

    /// Append SVG path data: integer `M` to the start, `L` to each further point, then `Z`.
    pub fn write_path_data(&self, out: &mut String) {
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            // Writing into a String cannot fail.
            let _ = write!(out, "{cmd}{},{}", round_half_up(p.x), round_half_up(p.y));
        }
        out.push('Z');
    }

    /// SVG path data as a fresh string.
    pub fn to_path_data(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 9 + 1);
        self.write_path_data(&mut out);
        out
    }
}

/// Evaluate fold `k` of an `n`-fold shape at global animation `angle`.
///
/// `n` must be at least 1. Any integer `k` is accepted; it aliases onto fold `k mod n`.
pub fn evaluate(
    n: u32,
    k: i64,
    angle: f64,
    layer: Layer,
    scale: f64,
    daily: &DailyParameters,
) -> ClosedCurve {
    debug_assert!(n >= 1, "curve needs at least one fold");
    let nf = f64::from(n);
    let kf = k as f64;

    let points = (0..=CURVE_STEPS)
        .map(|i| {
            let alpha = SEAM_GAP + (i as f64 / CURVE_STEPS as f64) * (TAU - 2.0 * SEAM_GAP);
            let theta = (alpha + TAU * kf) / nf;
            match layer {
                Layer::Outer => outer_point(alpha, theta, nf, angle, scale, daily),
                Layer::Inner => inner_point(alpha, theta, nf, angle, scale, daily),
            }
        })
        .collect();

    ClosedCurve::new(points)
}

fn outer_point(
    alpha: f64,
    theta: f64,
    n: f64,
    angle: f64,
    scale: f64,
    daily: &DailyParameters,
) -> Point {
    let x = (theta + angle * 0.5).cos();
    let y = (theta + angle * 0.3).sin();
    let twist = (alpha * n + angle * daily.breath_rate + daily.phase).sin() * daily.twist_amplitude;
    rotate_scaled(x, y, twist, scale)
}

fn inner_point(
    alpha: f64,
    theta: f64,
    n: f64,
    angle: f64,
    scale: f64,
    daily: &DailyParameters,
) -> Point {
    let base = daily.inner_wave_base;
    let radicand = base + (1.0 - base) * (alpha * n).sin();
    debug_assert!(
        radicand >= 0.0,
        "inner radius radicand {radicand} < 0; inner_wave_base must be >= 0.5"
    );
    let r = radicand.powf(1.0 / n);

    let x = r * (theta + angle * 0.7).cos();
    let y = r * (theta + angle * 0.5).sin();
    let twist = (alpha * n - angle * daily.breath_rate * 0.7 + daily.phase * 0.7).cos()
        * daily.twist_amplitude
        * 1.2;
    let p = rotate_scaled(x, y, twist, scale);
    Point::new(p.x * daily.inner_scale_ratio, p.y * daily.inner_scale_ratio)
}

fn rotate_scaled(x: f64, y: f64, twist: f64, scale: f64) -> Point {
    let (sin, cos) = (twist.sin(), twist.cos());
    Point::new((x * cos - y * sin) * scale, (x * sin + y * cos) * scale)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
