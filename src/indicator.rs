use embedded_hal::digital::OutputPin;

/// Secondary single-LED status light.
///
/// Tracks the logical state and maps it to pin levels. Most boards wire the
/// onboard LED to VCC, so it lights up when the pin is driven low.
pub struct StatusIndicator<P: OutputPin> {
    pin: P,
    active_low: bool,
    on: bool,
}

impl<P: OutputPin> StatusIndicator<P> {
    /// Wrap an already configured output pin
    pub const fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            on: false,
        }
    }

    /// Turn the indicator on or off
    pub fn set(&mut self, on: bool) {
        // Pin errors are not reported at this layer
        let _ = if on == self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
        self.on = on;
    }

    /// Last logical state written to the pin
    pub const fn is_on(&self) -> bool {
        self.on
    }
}
