use std::f64::consts::PI;
use std::sync::Arc;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ManifoldError, ManifoldResult};
use crate::geometry::curve::{ClosedCurve, Layer, evaluate};
use crate::params::DailyParameters;

/// Upper bound on frames per cycle.
pub const MAX_FRAMES: usize = 72;

/// Frame budget shared by all folds; more folds means fewer frames.
pub const FRAME_BUDGET: usize = 520;

/// Parametric angle swept over one animation loop.
pub const ANGLE_CYCLE: f64 = 20.0 * PI;

/// Frames per cycle for an `n`-fold shape: `min(72, floor(520 / n))`.
pub fn frame_count(n: u32) -> usize {
    MAX_FRAMES.min(FRAME_BUDGET / n.max(1) as usize)
}

/// Global animation angle of `frame` in a cycle of `frames` frames.
pub fn frame_angle(frame: FrameIndex, frames: usize) -> f64 {
    (frame.0 as f64 / frames as f64) * ANGLE_CYCLE
}

/// Outer and inner curves for every `(frame, fold)` of one cycle.
#[derive(Clone, Debug)]
pub struct FrameGrid {
    dimensions: u32,
    frames: usize,
    outer: Vec<Vec<Arc<ClosedCurve>>>,
    inner: Vec<Vec<Arc<ClosedCurve>>>,
}

impl FrameGrid {
    /// Evaluate both layers for every frame, frame-major then fold.
    #[tracing::instrument(level = "debug", skip(daily))]
    pub fn sequence(n: u32, scale: f64, daily: &DailyParameters) -> ManifoldResult<Self> {
        if n == 0 {
            return Err(ManifoldError::validation("dimension count must be >= 1"));
        }
        let frames = frame_count(n);

        let mut outer = Vec::with_capacity(frames);
        let mut inner = Vec::with_capacity(frames);
        for f in 0..frames {
            let angle = frame_angle(FrameIndex(f), frames);
            let mut outer_row = Vec::with_capacity(n as usize);
            let mut inner_row = Vec::with_capacity(n as usize);
            for k in 0..i64::from(n) {
                outer_row.push(Arc::new(evaluate(n, k, angle, Layer::Outer, scale, daily)));
                inner_row.push(Arc::new(evaluate(n, k, angle, Layer::Inner, scale, daily)));
            }
            outer.push(outer_row);
            inner.push(inner_row);
        }

        tracing::debug!(frames, folds = n, "sequenced frame grid");
        Ok(Self {
            dimensions: n,
            frames,
            outer,
            inner,
        })
    }

    /// Folds per frame.
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Frames in the cycle.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Curve of `fold` on `layer` at `frame`.
    ///
    /// Panics when `frame` or `fold` is out of range.
    pub fn curve(&self, layer: Layer, frame: FrameIndex, fold: usize) -> &Arc<ClosedCurve> {
        let rows = match layer {
            Layer::Outer => &self.outer,
            Layer::Inner => &self.inner,
        };
        &rows[frame.0][fold]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/frames.rs"]
mod tests;
