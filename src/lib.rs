//! manifold-daily turns a calendar date into a unique animated SVG.
//!
//! The date string seeds a deterministic stream; everything else follows from it:
//!
//! 1. **Seed**: `YYYY-MM-DD` → [`Seed`] (strictly validated) and a [`SeedRng`]
//! 2. **Sample**: background color, then [`DailyParameters`]
//! 3. **Evaluate**: per `(frame, fold, layer)` curves into a [`FrameGrid`]
//! 4. **Assemble**: `3n` [`StrokePath`]s (core, ghost, inner per fold)
//! 5. **Serialize**: a [`Document`] with one `<animate>` per stroke
//!
//! The same seed always yields byte-identical output. The RNG is an owned value threaded
//! through the pipeline, so independent runs never interfere.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod document;
mod foundation;
mod geometry;
mod output;
mod params;
mod pipeline;
mod seed;
mod theme;

pub use crate::compose::color::Hsl;
pub use crate::compose::paths::{Species, StrokePath, StrokeStyle, assemble, fold_hue};
pub use crate::document::svg::{ANIMATION_SECS, Document, KEYFRAME_SEPARATOR};
pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect};
pub use crate::foundation::error::{ManifoldError, ManifoldResult};
pub use crate::geometry::curve::{CURVE_STEPS, ClosedCurve, Layer, SEAM_GAP, evaluate};
pub use crate::geometry::frames::{
    ANGLE_CYCLE, FRAME_BUDGET, FrameGrid, MAX_FRAMES, frame_angle, frame_count,
};
pub use crate::output::sink::{DocumentSink, FileSink, FileSinkOpts, InMemorySink};
pub use crate::params::DailyParameters;
pub use crate::pipeline::{Artwork, ArtworkStats, generate, generate_for_date, watermark};
pub use crate::seed::date::Seed;
pub use crate::seed::rng::SeedRng;
pub use crate::theme::{BACKGROUNDS, THEMES, Theme};
