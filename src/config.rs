use embassy_time::Duration;

use crate::PixelFormat;
use crate::state::LightState;

/// Number of pixels on the reference strip
pub const DEFAULT_LED_COUNT: usize = 15;

/// Hold time that turns a press into a long press
pub const LONG_PRESS: Duration = Duration::from_millis(4000);

/// Strip and indicator configuration
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Format tag submitted with every frame
    pub pixel_format: PixelFormat,
    /// Indicator LED lights up when its pin is low
    pub indicator_active_low: bool,
    /// State rendered at boot
    pub initial_state: LightState,
}

impl StripConfig {
    pub const fn new() -> Self {
        Self {
            pixel_format: PixelFormat::Rgbw,
            indicator_active_low: true,
            initial_state: LightState::new(),
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for the button collaborator
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    /// Contact bounce filter window
    pub debounce: Duration,
    /// Hold time for [`ButtonEvent::LongPress`](crate::input::ButtonEvent::LongPress)
    pub long_press: Duration,
    /// Pressed button pulls the pin low
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(20),
            long_press: LONG_PRESS,
            active_low: true,
        }
    }
}

/// Accessory category advertised by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryCategory {
    Lightbulb,
}

/// Accessory information published through the bridge
#[derive(Debug, Clone, Copy)]
pub struct AccessoryInfo {
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub serial_number: &'static str,
    pub model: &'static str,
    pub firmware_revision: &'static str,
    pub category: AccessoryCategory,
    /// Pairing code, `XXX-XX-XXX`
    pub setup_code: &'static str,
    pub setup_id: &'static str,
}

pub const ACCESSORY_INFO: AccessoryInfo = AccessoryInfo {
    name: "RGBW Strip",
    manufacturer: "StudioPieters",
    serial_number: "Q39QDPS7GRX7",
    model: "HKSP1T/S",
    firmware_revision: "0.0.1",
    category: AccessoryCategory::Lightbulb,
    setup_code: "070-45-077",
    setup_id: "1NP7",
};
