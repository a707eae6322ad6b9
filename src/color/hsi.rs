//! HSI to RGBW conversion
//!
//! Hue/saturation/intensity model with a dedicated white channel, see
//! <http://blog.saikoled.com/post/44677718712/how-to-convert-from-hsi-to-rgb-white>.
//! Inputs are never rejected: hue wraps around the circle, saturation and
//! intensity are clamped to `0..=100`.

use core::f32::consts::FRAC_PI_3;

use libm::{cosf, fmodf, sqrtf};

use super::{Rgbw, rgbw};

/// Maximum channel value
const SCALE: f32 = 255.0;

/// Width of a hue sector in degrees
const SECTOR_WIDTH: f32 = 120.0;

/// One third of the hue circle.
///
/// Inside a sector two primaries carry the color (`leading` fades into
/// `trailing` as hue grows) and the third one only carries the desaturated part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    /// `[0, 120)`: red fades into green
    RedGreen,
    /// `[120, 240)`: green fades into blue
    GreenBlue,
    /// `[240, 360)`: blue fades into red
    BlueRed,
}

impl Sector {
    /// Find the sector of a hue already normalized to `[0, 360)`
    pub fn of(hue: f32) -> Self {
        if hue < SECTOR_WIDTH {
            Self::RedGreen
        } else if hue < 2.0 * SECTOR_WIDTH {
            Self::GreenBlue
        } else {
            Self::BlueRed
        }
    }

    /// Hue in degrees at which the sector starts
    pub const fn start(self) -> f32 {
        match self {
            Self::RedGreen => 0.0,
            Self::GreenBlue => SECTOR_WIDTH,
            Self::BlueRed => 2.0 * SECTOR_WIDTH,
        }
    }

    /// Place sector-relative channel values into `(r, g, b)` order
    const fn arrange(self, leading: f32, trailing: f32, residual: f32) -> (f32, f32, f32) {
        match self {
            Self::RedGreen => (leading, trailing, residual),
            Self::GreenBlue => (residual, leading, trailing),
            Self::BlueRed => (trailing, residual, leading),
        }
    }
}

/// Convert HSI to an RGBW pixel
///
/// # Arguments
/// * `hue` - Hue in degrees, any value (wrapped into `[0, 360)`)
/// * `saturation` - Saturation in percent (clamped to `0..=100`)
/// * `intensity` - Intensity in percent (clamped to `0..=100`)
///
/// Channel values are truncated, not rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsi2rgbw(hue: f32, saturation: f32, intensity: f32) -> Rgbw {
    let hue = normalize_hue(hue);
    let saturation = ratio(saturation);
    let intensity = ratio(intensity);
    // Finer granularity near zero
    let intensity = intensity * sqrtf(intensity);

    let sector = Sector::of(hue);
    let h = (hue - sector.start()).to_radians();
    let spread = cosf(h) / cosf(FRAC_PI_3 - h);

    let third = SCALE * intensity / 3.0;
    let leading = third * (1.0 + saturation * spread);
    let trailing = third * (1.0 + saturation * (1.0 - spread));
    let residual = third * (1.0 - saturation);
    let (r, g, b) = sector.arrange(leading, trailing, residual);

    let w = SCALE * (1.0 - saturation) * intensity;

    rgbw(r as u8, g as u8, b as u8, w as u8)
}

/// Wrap hue into `[0, 360)`
fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut hue = fmodf(hue, 360.0);
    if hue < 0.0 {
        hue += 360.0;
    }
    // Tiny negative values round up to 360 after the shift
    if hue >= 360.0 { 0.0 } else { hue }
}

/// Percent to a ratio clamped to `[0, 1]`. NaN maps to 0.
fn ratio(percent: f32) -> f32 {
    let value = percent / 100.0;
    if value > 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}
