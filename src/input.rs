//! Button input
//!
//! Routes classified button events. Debouncing and press classification
//! belong to the button driver, see [`ButtonConfig`](crate::config::ButtonConfig).

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::sequencer::SequenceQueue;

const EVENT_SINGLE_PRESS: u8 = 0;
const EVENT_LONG_PRESS: u8 = 1;

/// Classified button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    SinglePress,
    /// Held for at least the long press threshold
    LongPress,
    /// Event code the core does not know
    Unknown(u8),
}

impl ButtonEvent {
    /// Decode a raw event code reported by the button driver
    pub const fn from_raw(code: u8) -> Self {
        match code {
            EVENT_SINGLE_PRESS => Self::SinglePress,
            EVENT_LONG_PRESS => Self::LongPress,
            code => Self::Unknown(code),
        }
    }
}

/// Routes button events to the sequencer
pub struct InputDispatcher<'a> {
    sequences: &'a SequenceQueue,
}

impl<'a> InputDispatcher<'a> {
    pub const fn new(sequences: &'a SequenceQueue) -> Self {
        Self { sequences }
    }

    /// Handle one event. Never blocks on the triggered sequence.
    pub fn dispatch(&self, event: ButtonEvent) {
        match event {
            ButtonEvent::SinglePress => {
                // Reserved
            }
            ButtonEvent::LongPress => {
                if !self.sequences.request_reset() {
                    #[cfg(feature = "esp32-log")]
                    println!("button: factory reset already in progress");
                }
            }
            ButtonEvent::Unknown(_code) => {
                #[cfg(feature = "esp32-log")]
                println!("button: unknown event {}", _code);
            }
        }
    }
}
