use crate::color::{BLACK, Rgbw, hsi2rgbw};

/// Default power flag
pub const DEFAULT_ON: bool = false;
/// Default hue (degrees)
pub const DEFAULT_HUE: f32 = 0.0;
/// Default saturation (percent)
pub const DEFAULT_SATURATION: f32 = 59.0;
/// Default brightness (percent)
pub const DEFAULT_BRIGHTNESS: f32 = 100.0;

/// Logical light state of the accessory.
///
/// Values are stored as received. Out-of-range hue, saturation and
/// brightness are tolerated here and normalized at conversion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Power flag
    pub on: bool,
    /// Hue in degrees, `[0, 360)`
    pub hue: f32,
    /// Saturation in percent, `0..=100`
    pub saturation: f32,
    /// Brightness in percent, `0..=100`. Intensity term of the HSI model.
    pub brightness: f32,
}

impl LightState {
    /// Create a new light state with boot defaults
    pub const fn new() -> Self {
        Self {
            on: DEFAULT_ON,
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Pixel the strip should show for this state
    pub fn pixel(&self) -> Rgbw {
        if self.on {
            hsi2rgbw(self.hue, self.saturation, self.brightness)
        } else {
            BLACK
        }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
