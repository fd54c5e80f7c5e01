//! Daily generation pipeline: seed → parameters → frames → strokes → document.
//!
//! RNG draw order for one run is fixed:
//!
//! 1. background color, one `pick` over [`BACKGROUNDS`]
//! 2. [`DailyParameters`] fields, in declaration order
//!
//! Theme selection uses the day of year and never draws.

use crate::compose::paths::assemble;
use crate::document::svg::Document;
use crate::foundation::error::{ManifoldError, ManifoldResult};
use crate::foundation::math::Fnv1a64;
use crate::geometry::frames::FrameGrid;
use crate::params::DailyParameters;
use crate::seed::date::Seed;
use crate::seed::rng::SeedRng;
use crate::theme::{BACKGROUNDS, Theme};

/// Summary figures of a generated artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ArtworkStats {
    /// Animated stroke count (`3n`).
    pub paths: usize,
    /// Keyframes per stroke.
    pub frames: usize,
    /// Loop length in seconds.
    pub duration_secs: u32,
    /// Serialized document size.
    pub bytes: usize,
}

/// The output of one run.
#[derive(Clone, Debug)]
pub struct Artwork {
    seed: Seed,
    theme: Theme,
    params: DailyParameters,
    frames: usize,
    document: Document,
    svg: String,
}

impl Artwork {
    /// Seed the artwork was generated from.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Theme chosen for the seed's day.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Background color drawn for the day.
    pub fn background(&self) -> &str {
        self.document.background()
    }

    /// Curve parameters drawn for the day.
    pub fn params(&self) -> &DailyParameters {
        &self.params
    }

    /// Structured document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialized SVG text.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Summary figures for logs.
    pub fn stats(&self) -> ArtworkStats {
        ArtworkStats {
            paths: self.document.paths().len(),
            frames: self.frames,
            duration_secs: self.document.duration_secs(),
            bytes: self.svg.len(),
        }
    }

    /// 64-bit FNV-1a hash of the SVG bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.svg.as_bytes());
        h.finish()
    }
}

/// Watermark label: date and theme name.
pub fn watermark(seed: &Seed, theme: &Theme) -> String {
    format!("{}  ·  {}", seed, theme.name)
}

/// Generate the artwork for a date string.
pub fn generate_for_date(date: &str) -> ManifoldResult<Artwork> {
    generate(&Seed::parse(date)?)
}

/// Generate the artwork for a seed.
#[tracing::instrument(skip_all, fields(seed = %seed))]
pub fn generate(seed: &Seed) -> ManifoldResult<Artwork> {
    let theme = Theme::for_seed(seed);
    let mut rng = SeedRng::new(seed.as_str());

    let background = *rng
        .pick(&BACKGROUNDS)
        .ok_or_else(|| ManifoldError::validation("background palette is empty"))?;
    let params = DailyParameters::sample(&mut rng);
    params.validate()?;
    tracing::debug!(?params, background, draws = rng.draws(), "sampled daily parameters");

    let grid = FrameGrid::sequence(theme.dimensions, params.scale, &params)?;
    let frames = grid.frame_count();
    let paths = assemble(&grid, params.hue_offset);

    let document = Document::new(background, paths, watermark(seed, &theme));
    let svg = document.to_svg();

    let art = Artwork {
        seed: seed.clone(),
        theme,
        params,
        frames,
        document,
        svg,
    };
    tracing::debug!(stats = ?art.stats(), "built document");
    Ok(art)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
