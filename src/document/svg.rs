//! Animated SVG serialization.
//!
//! Formatting only: nothing here draws from the RNG, so a document's bytes are a pure
//! function of its strokes, background and watermark.

use std::fmt::Write as _;

use crate::compose::paths::StrokePath;
use crate::foundation::core::Canvas;

/// Length of one animation loop in seconds.
pub const ANIMATION_SECS: u32 = 120;

/// Separator between keyframe values in an `<animate values=…>` list.
pub const KEYFRAME_SEPARATOR: char = ';';

/// A complete daily document, ready to serialize.
#[derive(Clone, Debug)]
pub struct Document {
    canvas: Canvas,
    background: String,
    paths: Vec<StrokePath>,
    duration_secs: u32,
    watermark: String,
}

impl Document {
    /// Assemble a document on the daily canvas with the standard loop length.
    pub fn new(
        background: impl Into<String>,
        paths: Vec<StrokePath>,
        watermark: impl Into<String>,
    ) -> Self {
        Self {
            canvas: Canvas::DAILY,
            background: background.into(),
            paths,
            duration_secs: ANIMATION_SECS,
            watermark: watermark.into(),
        }
    }

    /// Canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Background fill color.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Animated strokes in draw order.
    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }

    /// Loop length in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Watermark label.
    pub fn watermark(&self) -> &str {
        &self.watermark
    }

    /// Serialize to SVG text.
    pub fn to_svg(&self) -> String {
        let Canvas { width, height } = self.canvas;
        let center = self.canvas.center();

        let mut out = String::with_capacity(self.estimated_len());
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" \
             width=\"{width}\" height=\"{height}\">\n"
        );
        let _ = write!(
            out,
            "<style>\n    .bg {{ fill: {}; }}\n    .c {{\n      fill: none;\n      \
             stroke-linecap: round;\n      stroke-linejoin: round;\n    }}</style>\n",
            self.background
        );
        let _ = writeln!(out, "<rect class=\"bg\" width=\"{width}\" height=\"{height}\"/>");
        let _ = writeln!(out, "<g transform=\"translate({},{})\">", center.x, center.y);
        for path in &self.paths {
            self.write_path(&mut out, path);
        }
        out.push_str("\n</g>\n");
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" fill=\"white\" fill-opacity=\"0.2\" font-family=\"monospace\" \
             font-size=\"10\" text-anchor=\"end\">{}</text>\n</svg>",
            width.saturating_sub(15),
            height.saturating_sub(12),
            escape_xml(&self.watermark)
        );
        out
    }

    fn write_path(&self, out: &mut String, path: &StrokePath) {
        let _ = write!(
            out,
            "<path class=\"c\" style=\"stroke:{};stroke-width:{:.2};stroke-opacity:{:.3}\" d=\"",
            path.stroke, path.width, path.opacity
        );
        if let Some(first) = path.frames.first() {
            first.write_path_data(out);
        }
        out.push_str("\"><animate attributeName=\"d\" values=\"");
        for (i, curve) in path.frames.iter().enumerate() {
            if i > 0 {
                out.push(KEYFRAME_SEPARATOR);
            }
            curve.write_path_data(out);
        }
        let _ = write!(
            out,
            "\" dur=\"{}s\" repeatCount=\"indefinite\" calcMode=\"linear\"/></path>",
            self.duration_secs
        );
    }

    fn estimated_len(&self) -> usize {
        // Roughly 9 bytes per rounded point, one extra copy of the first frame.
        let curves: usize = self.paths.iter().map(|p| p.frames.len() + 1).sum();
        let points = self
            .paths
            .first()
            .and_then(|p| p.frames.first())
            .map_or(0, |c| c.points().len());
        1024 + curves * points * 9
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/svg.rs"]
mod tests;
