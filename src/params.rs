//! Per-day curve parameters drawn from the seeded stream.

use std::f64::consts::{PI, TAU};

use crate::foundation::error::{ManifoldError, ManifoldResult};
use crate::seed::rng::SeedRng;

/// Immutable set of parameters shaping one day's curves.
///
/// Fields are declared in draw order. [`DailyParameters::sample`] consumes exactly one double
/// per field, top to bottom; reordering fields or draws changes every downstream byte.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailyParameters {
    /// Curve distortion strength in radians, `[0.8, π)`.
    pub twist_amplitude: f64,
    /// Oscillation frequency over the angle cycle, `[0.3, 0.5)`.
    pub breath_rate: f64,
    /// Oscillation phase offset in radians, `[0, 2π)`.
    pub phase: f64,
    /// Radial floor of the inner layer, `[0.5, 0.8)`.
    pub inner_wave_base: f64,
    /// Inner layer size relative to the outer one, `[0.7, 0.85)`.
    pub inner_scale_ratio: f64,
    /// Overall geometry scale in output units, `[120, 155]`.
    pub scale: f64,
    /// Base palette hue in degrees, `[0, 360)`.
    pub hue_offset: f64,
}

impl DailyParameters {
    /// Draw every field once, in declaration order.
    pub fn sample(rng: &mut SeedRng) -> Self {
        let twist_amplitude = rng.rand_float(0.8, PI);
        let breath_rate = rng.rand_float(3.0, 5.0) / 10.0;
        let phase = rng.rand_float(0.0, TAU);
        let inner_wave_base = rng.rand_float(0.5, 0.8);
        let inner_scale_ratio = rng.rand_float(0.7, 0.85);
        let scale = rng.rand_float(120.0, 155.0);
        let hue_offset = rng.rand_float(0.0, 360.0);

        Self {
            twist_amplitude,
            breath_rate,
            phase,
            inner_wave_base,
            inner_scale_ratio,
            scale,
            hue_offset,
        }
    }

    /// Check every field against its sampling range.
    ///
    /// Sampled values always pass; this guards values built by hand or deserialized. In
    /// particular `inner_wave_base >= 0.5` keeps the inner-layer radicand non-negative.
    pub fn validate(&self) -> ManifoldResult<()> {
        check_half_open("twist_amplitude", self.twist_amplitude, 0.8, PI)?;
        check_half_open("breath_rate", self.breath_rate, 0.3, 0.5)?;
        check_half_open("phase", self.phase, 0.0, TAU)?;
        check_half_open("inner_wave_base", self.inner_wave_base, 0.5, 0.8)?;
        check_half_open("inner_scale_ratio", self.inner_scale_ratio, 0.7, 0.85)?;
        if !(120.0..=155.0).contains(&self.scale) {
            return Err(ManifoldError::validation(format!(
                "scale must be in [120, 155], got {}",
                self.scale
            )));
        }
        check_half_open("hue_offset", self.hue_offset, 0.0, 360.0)
    }

    /// Twist amplitude in degrees, for logs.
    pub fn vitality_degrees(&self) -> f64 {
        self.twist_amplitude / PI * 180.0
    }

    /// Seconds per breathing oscillation over an animation of `duration_secs`.
    pub fn breath_period_secs(&self, duration_secs: f64) -> f64 {
        duration_secs / (self.breath_rate * 10.0)
    }
}

fn check_half_open(name: &str, value: f64, lo: f64, hi: f64) -> ManifoldResult<()> {
    if (lo..hi).contains(&value) {
        Ok(())
    } else {
        Err(ManifoldError::validation(format!(
            "{name} must be in [{lo}, {hi}), got {value}"
        )))
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
