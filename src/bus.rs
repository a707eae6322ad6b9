//! Pixel-bus adapter for `smart-leds` drivers.

use smart_leds::SmartLedsWrite;

use crate::color::Rgbw;
use crate::{PixelBus, PixelFormat};

/// Exposes any [`SmartLedsWrite`] driver as a [`PixelBus`].
///
/// The wire layout is fixed by the driver's color type, so the format tag is
/// informational only. Driver errors are dropped.
pub struct SmartLedsBus<D> {
    driver: D,
}

impl<D> SmartLedsBus<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Give the driver back
    pub fn release(self) -> D {
        self.driver
    }
}

impl<D> PixelBus for SmartLedsBus<D>
where
    D: SmartLedsWrite,
    Rgbw: Into<D::Color>,
{
    fn submit(&mut self, pixels: &[Rgbw], _format: PixelFormat) {
        let _ = self.driver.write(pixels.iter().copied());
    }
}
