use std::sync::Arc;

use crate::compose::color::Hsl;
use crate::foundation::core::FrameIndex;
use crate::geometry::curve::{ClosedCurve, Layer};
use crate::geometry::frames::FrameGrid;

/// The three stroke kinds drawn for every fold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Species {
    /// Bright primary outer curve.
    Core,
    /// Wide faint echo of the outer curve, one frame behind.
    Ghost,
    /// Thin muted inner-layer curve.
    Inner,
}

/// Fixed stroke styling of a [`Species`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// HSL saturation percentage.
    pub saturation: u8,
    /// HSL lightness percentage.
    pub lightness: u8,
    /// Stroke width in user units.
    pub width: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

impl Species {
    /// Emission order within a fold.
    pub const ALL: [Self; 3] = [Self::Core, Self::Ghost, Self::Inner];

    /// Stroke styling for this species.
    pub fn style(self) -> StrokeStyle {
        match self {
            Self::Core => StrokeStyle {
                saturation: 80,
                lightness: 85,
                width: 1.3,
                opacity: 0.50,
            },
            Self::Ghost => StrokeStyle {
                saturation: 70,
                lightness: 78,
                width: 3.0,
                opacity: 0.10,
            },
            Self::Inner => StrokeStyle {
                saturation: 55,
                lightness: 65,
                width: 0.6,
                opacity: 0.20,
            },
        }
    }

    /// Curve layer this species traces.
    pub fn layer(self) -> Layer {
        match self {
            Self::Core | Self::Ghost => Layer::Outer,
            Self::Inner => Layer::Inner,
        }
    }

    /// Grid frame shown at output frame `frame` of a `frames`-long cycle.
    pub fn source_frame(self, frame: FrameIndex, frames: usize) -> FrameIndex {
        match self {
            Self::Ghost => frame.previous(frames),
            Self::Core | Self::Inner => frame,
        }
    }
}

/// One drawable animated stroke: style plus one curve per frame.
#[derive(Clone, Debug)]
pub struct StrokePath {
    /// Fold this stroke belongs to.
    pub fold: u32,
    /// Stroke kind.
    pub species: Species,
    /// Stroke color.
    pub stroke: Hsl,
    /// Stroke width in user units.
    pub width: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Keyframe curves in output frame order.
    pub frames: Vec<Arc<ClosedCurve>>,
}

/// Hue of fold `k` out of `n`, spread evenly around the wheel from `hue_offset`.
pub fn fold_hue(hue_offset: f64, k: u32, n: u32) -> f64 {
    hue_offset + (f64::from(k) / f64::from(n)) * 360.0
}

/// Build `3n` strokes from a frame grid, fold-major in [`Species::ALL`] order.
pub fn assemble(grid: &FrameGrid, hue_offset: f64) -> Vec<StrokePath> {
    let n = grid.dimensions();
    let frames = grid.frame_count();

    let mut paths = Vec::with_capacity(n as usize * Species::ALL.len());
    for k in 0..n {
        let hue = fold_hue(hue_offset, k, n);
        for species in Species::ALL {
            let style = species.style();
            let layer = species.layer();
            let keyframes = (0..frames)
                .map(|f| {
                    let src = species.source_frame(FrameIndex(f), frames);
                    Arc::clone(grid.curve(layer, src, k as usize))
                })
                .collect();
            paths.push(StrokePath {
                fold: k,
                species,
                stroke: Hsl::new(hue, style.saturation, style.lightness),
                width: style.width,
                opacity: style.opacity,
                frames: keyframes,
            });
        }
    }
    paths
}

#[cfg(test)]
#[path = "../../tests/unit/compose/paths.rs"]
mod tests;
