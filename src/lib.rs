#![no_std]

pub mod accessory;
pub mod bus;
pub mod color;
pub mod config;
pub mod error;
pub mod indicator;
pub mod input;
pub mod ports;
pub mod renderer;
pub mod sequencer;
pub mod state;
pub mod value;

pub use accessory::LightAccessory;
pub use bus::SmartLedsBus;
pub use config::{ACCESSORY_INFO, AccessoryInfo, ButtonConfig, DEFAULT_LED_COUNT, StripConfig};
pub use error::Error;
pub use input::{ButtonEvent, InputDispatcher};
pub use renderer::Renderer;
pub use sequencer::{
    FactoryResetPorts, IndicatorSequencer, SequenceQueue, SequenceRequest, SequenceTimings,
    StripOverride,
};
pub use state::LightState;
pub use value::{Value, ValueFormat};

pub use color::{Rgbw, hsi2rgbw};
pub use embassy_time::Duration;

/// Wire format of the pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Three channels per pixel, white is not transmitted
    Rgb,
    /// Four channels per pixel
    Rgbw,
}

/// Abstract pixel-bus driver trait
///
/// Implement this trait to support different hardware platforms.
/// `submit` returns once the frame is on the wire.
pub trait PixelBus {
    /// Transmit the whole strip
    fn submit(&mut self, pixels: &[Rgbw], format: PixelFormat);
}
