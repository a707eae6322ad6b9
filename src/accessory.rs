//! Light accessory
//!
//! Owned state object behind the bridge endpoints. It keeps the single
//! [`LightState`] and the [`Renderer`], renders synchronously on every accepted
//! setter and hands the strip over to the sequencer while an indicator sequence
//! is running.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelBus;
use crate::color::Rgbw;
use crate::config::StripConfig;
use crate::error::Error;
use crate::indicator::StatusIndicator;
use crate::renderer::Renderer;
use crate::sequencer::{SequenceQueue, StripOverride};
use crate::state::LightState;
use crate::value::Value;

struct Inner<B: PixelBus, P: OutputPin, const N: usize> {
    state: LightState,
    renderer: Renderer<B, P, N>,
    /// An indicator sequence owns the strip
    overridden: bool,
}

impl<B: PixelBus, P: OutputPin, const N: usize> Inner<B, P, N> {
    fn refresh(&mut self) {
        if self.overridden {
            #[cfg(feature = "esp32-log")]
            println!("light: strip is overridden, render deferred");
            return;
        }
        self.renderer.render(&self.state);
    }
}

/// RGBW strip accessory
pub struct LightAccessory<'a, B: PixelBus, P: OutputPin, const N: usize> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Inner<B, P, N>>>,
    sequences: &'a SequenceQueue,
}

impl<'a, B: PixelBus, P: OutputPin, const N: usize> LightAccessory<'a, B, P, N> {
    /// Create a new accessory
    ///
    /// # Arguments
    /// * `bus` - Pixel-bus driver of the strip
    /// * `indicator` - Configured output pin of the status LED
    /// * `config` - Strip configuration
    /// * `sequences` - Queue drained by the indicator sequencer
    pub fn new(bus: B, indicator: P, config: &StripConfig, sequences: &'a SequenceQueue) -> Self {
        let indicator = StatusIndicator::new(indicator, config.indicator_active_low);
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                state: config.initial_state,
                renderer: Renderer::new(bus, indicator, config.pixel_format),
                overridden: false,
            })),
            sequences,
        }
    }

    /// Render the boot state
    pub fn init(&self) {
        self.with_inner(Inner::refresh);
    }

    /// Snapshot of the light state
    pub fn state(&self) -> LightState {
        self.with_inner(|inner| inner.state)
    }

    /// Copy of the last frame submitted to the bus
    pub fn pixels(&self) -> [Rgbw; N] {
        self.with_inner(|inner| *inner.renderer.pixels())
    }

    /// Logical state of the status indicator
    pub fn indicator_on(&self) -> bool {
        self.with_inner(|inner| inner.renderer.indicator_on())
    }

    /// Check if an indicator sequence owns the strip
    pub fn is_overridden(&self) -> bool {
        self.with_inner(|inner| inner.overridden)
    }

    pub fn on(&self) -> Value {
        Value::Bool(self.state().on)
    }

    pub fn set_on(&self, value: Value) {
        self.apply(value.as_bool(), |state, on| state.on = on);
    }

    /// Brightness is exchanged as an integer percentage
    #[allow(clippy::cast_possible_truncation)]
    pub fn brightness(&self) -> Value {
        Value::Int(self.state().brightness as i32)
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn set_brightness(&self, value: Value) {
        self.apply(value.as_int(), |state, brightness| {
            state.brightness = brightness as f32;
        });
    }

    pub fn hue(&self) -> Value {
        Value::Float(self.state().hue)
    }

    pub fn set_hue(&self, value: Value) {
        self.apply(value.as_float(), |state, hue| state.hue = hue);
    }

    pub fn saturation(&self) -> Value {
        Value::Float(self.state().saturation)
    }

    pub fn set_saturation(&self, value: Value) {
        self.apply(value.as_float(), |state, saturation| {
            state.saturation = saturation;
        });
    }

    /// Start the identify sequence without waiting for it
    pub fn identify(&self) {
        if !self.sequences.request_identify() {
            #[cfg(feature = "esp32-log")]
            println!("light: identify ignored, another sequence is in flight");
        }
    }

    /// Update the state and render it, or keep the state on a format mismatch
    fn apply<T>(&self, value: Result<T, Error>, update: impl FnOnce(&mut LightState, T)) {
        match value {
            Ok(value) => self.with_inner(|inner| {
                update(&mut inner.state, value);
                inner.refresh();
            }),
            Err(_e) => {
                #[cfg(feature = "esp32-log")]
                println!("light: invalid value: {}", _e);
            }
        }
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut Inner<B, P, N>) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }
}

impl<B: PixelBus, P: OutputPin, const N: usize> StripOverride for LightAccessory<'_, B, P, N> {
    fn begin_override(&self) {
        self.with_inner(|inner| inner.overridden = true);
    }

    fn override_fill(&self, pixel: Rgbw) {
        self.with_inner(|inner| inner.renderer.fill(pixel));
    }

    fn override_indicator(&self, on: bool) {
        self.with_inner(|inner| inner.renderer.set_indicator(on));
    }

    fn end_override(&self) {
        self.with_inner(|inner| {
            inner.overridden = false;
            inner.refresh();
        });
    }
}
