use embedded_hal::digital::OutputPin;

use crate::color::Rgbw;
use crate::indicator::StatusIndicator;
use crate::state::LightState;
use crate::{PixelBus, PixelFormat};

/// Strip renderer
///
/// Owns the frame buffer and both outputs. Every `render`/`fill` overwrites
/// the whole buffer and submits it to the bus exactly once.
pub struct Renderer<B: PixelBus, P: OutputPin, const N: usize> {
    bus: B,
    format: PixelFormat,
    indicator: StatusIndicator<P>,
    frame_buffer: [Rgbw; N],
}

impl<B: PixelBus, P: OutputPin, const N: usize> Renderer<B, P, N> {
    pub const fn new(bus: B, indicator: StatusIndicator<P>, format: PixelFormat) -> Self {
        Self {
            bus,
            format,
            indicator,
            frame_buffer: [crate::color::BLACK; N],
        }
    }

    /// Show the light state: the converted color when on, black when off.
    /// The indicator mirrors the power flag.
    pub fn render(&mut self, state: &LightState) {
        self.indicator.set(state.on);
        self.fill(state.pixel());
    }

    /// Write one color into every pixel and submit the buffer
    pub fn fill(&mut self, pixel: Rgbw) {
        for led in &mut self.frame_buffer {
            *led = pixel;
        }
        self.bus.submit(&self.frame_buffer, self.format);
    }

    /// Drive the indicator without touching the strip
    pub fn set_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }

    /// Current frame buffer
    pub const fn pixels(&self) -> &[Rgbw; N] {
        &self.frame_buffer
    }

    pub const fn indicator_on(&self) -> bool {
        self.indicator.is_on()
    }
}
