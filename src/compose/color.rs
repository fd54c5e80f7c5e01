use std::fmt;

use crate::foundation::math::wrap_degrees;

/// CSS `hsl()` stroke color. Hue is wrapped into `[0, 360)` when formatted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Hsl {
    /// Hue in degrees, any real value.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: u8,
    /// Lightness percentage.
    pub lightness: u8,
}

impl Hsl {
    /// Build a color from hue degrees and saturation/lightness percentages.
    pub fn new(hue: f64, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            wrap_degrees(self.hue),
            self.saturation,
            self.lightness
        )
    }
}
