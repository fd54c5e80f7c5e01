pub use kurbo::{Point, Rect};

/// Absolute 0-based frame index within one animation cycle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// The frame one step earlier in a looping cycle of `frames` frames.
    ///
    /// Frame 0 wraps to `frames - 1`. `frames` must be non-zero.
    pub fn previous(self, frames: usize) -> Self {
        debug_assert!(frames > 0, "cycle must contain at least one frame");
        Self((self.0 % frames + frames - 1) % frames)
    }
}

/// Output canvas dimensions in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: u32,
    /// Height in user units.
    pub height: u32,
}

impl Canvas {
    /// The fixed canvas every daily document is drawn on.
    pub const DAILY: Self = Self {
        width: 900,
        height: 400,
    };

    /// Canvas center; curve geometry is origin-centered and translated here.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
