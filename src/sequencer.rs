//! Indicator sequences
//!
//! Timed patterns that take the strip away from state rendering:
//! - identify: pink blinks, then the current state is restored
//! - factory reset: indicator warning, credential wipe, restart
//!
//! Requests go through a [`SequenceQueue`] and are executed by an
//! [`IndicatorSequencer`] running on its own task, so triggering never blocks.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, PINK, Rgbw};
use crate::ports::{NetworkConfigReset, PairingReset, SystemRestart};

/// Outer identify iterations
pub const IDENTIFY_GROUPS: usize = 3;
/// Blinks per identify group
pub const IDENTIFY_BLINKS: usize = 3;
/// Indicator blinks before the factory reset starts wiping
pub const RESET_WARNING_BLINKS: usize = 3;
/// Strip color of an identify blink
pub const IDENTIFY_COLOR: Rgbw = PINK;

/// One identify and one reset can be in flight at the same time
const QUEUE_SIZE: usize = 2;

/// Timings of the indicator sequences
#[derive(Debug, Clone, Copy)]
pub struct SequenceTimings {
    /// Lit phase of a blink
    pub blink_on: Duration,
    /// Dark phase of a blink
    pub blink_off: Duration,
    /// Pause after each identify group
    pub identify_pause: Duration,
    /// Wait after each factory reset step
    pub reset_step: Duration,
}

impl SequenceTimings {
    pub const fn new() -> Self {
        Self {
            blink_on: Duration::from_millis(100),
            blink_off: Duration::from_millis(100),
            identify_pause: Duration::from_millis(250),
            reset_step: Duration::from_millis(1000),
        }
    }
}

impl Default for SequenceTimings {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequence to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRequest {
    Identify,
    FactoryReset,
}

#[derive(Debug, Clone, Copy)]
struct QueueFlags {
    /// Identify is pending or running
    identify: bool,
    /// Factory reset was accepted. Never cleared.
    reset: bool,
}

/// Admission guard and mailbox for sequence requests.
///
/// Admits at most one identify in flight and a single factory reset per boot,
/// so two sequences never write to the strip at the same time.
pub struct SequenceQueue {
    requests: Channel<CriticalSectionRawMutex, SequenceRequest, QUEUE_SIZE>,
    flags: Mutex<Cell<QueueFlags>>,
}

impl SequenceQueue {
    pub const fn new() -> Self {
        Self {
            requests: Channel::new(),
            flags: Mutex::new(Cell::new(QueueFlags {
                identify: false,
                reset: false,
            })),
        }
    }

    /// Queue the identify sequence.
    ///
    /// Returns `false` if an identify is already in flight or a reset was accepted.
    pub fn request_identify(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.flags.borrow(cs);
            let mut flags = cell.get();
            if flags.identify || flags.reset {
                return false;
            }
            if self.requests.try_send(SequenceRequest::Identify).is_err() {
                return false;
            }
            flags.identify = true;
            cell.set(flags);
            true
        })
    }

    /// Queue the factory reset.
    ///
    /// Only the first call per boot is accepted. A reset queued behind a
    /// running identify starts as soon as the identify ends.
    pub fn request_reset(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.flags.borrow(cs);
            let mut flags = cell.get();
            if flags.reset {
                return false;
            }
            if self.requests.try_send(SequenceRequest::FactoryReset).is_err() {
                return false;
            }
            flags.reset = true;
            cell.set(flags);
            true
        })
    }

    /// Check if a factory reset was accepted
    pub fn is_reset_requested(&self) -> bool {
        critical_section::with(|cs| self.flags.borrow(cs).get().reset)
    }

    /// Check if an identify is pending or running
    pub fn is_identify_active(&self) -> bool {
        critical_section::with(|cs| self.flags.borrow(cs).get().identify)
    }

    /// Wait for the next request
    pub async fn next(&self) -> SequenceRequest {
        self.requests.receive().await
    }

    fn finish_identify(&self) {
        critical_section::with(|cs| {
            let cell = self.flags.borrow(cs);
            let mut flags = cell.get();
            flags.identify = false;
            cell.set(flags);
        });
    }
}

impl Default for SequenceQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip access used by the sequences.
///
/// While overridden, state changes must not reach the strip.
pub trait StripOverride {
    /// Take the strip away from state rendering
    fn begin_override(&self);

    /// Fill the whole strip with one color
    fn override_fill(&self, pixel: Rgbw);

    /// Drive the status indicator
    fn override_indicator(&self, on: bool);

    /// Give the strip back and render the current state
    fn end_override(&self);
}

/// Collaborators wiped and restarted by the factory reset
pub struct FactoryResetPorts<W, K, R> {
    pub network: W,
    pub pairing: K,
    pub system: R,
}

/// Runs queued indicator sequences.
///
/// `run` is meant to be the body of a dedicated task.
pub struct IndicatorSequencer<'a, S, D, W, K, R> {
    strip: &'a S,
    queue: &'a SequenceQueue,
    delay: D,
    timings: SequenceTimings,
    reset: FactoryResetPorts<W, K, R>,
}

impl<'a, S, D, W, K, R> IndicatorSequencer<'a, S, D, W, K, R>
where
    S: StripOverride,
    D: DelayNs,
    W: NetworkConfigReset,
    K: PairingReset,
    R: SystemRestart,
{
    pub const fn new(
        strip: &'a S,
        queue: &'a SequenceQueue,
        delay: D,
        timings: SequenceTimings,
        reset: FactoryResetPorts<W, K, R>,
    ) -> Self {
        Self {
            strip,
            queue,
            delay,
            timings,
            reset,
        }
    }

    /// Process requests forever
    pub async fn run(&mut self) -> ! {
        loop {
            if self.process_next().await == SequenceRequest::FactoryReset {
                // Restart returned. The strip stays overridden for good.
                core::future::pending::<()>().await;
            }
        }
    }

    /// Wait for one request and run it to completion
    pub async fn process_next(&mut self) -> SequenceRequest {
        let request = self.queue.next().await;
        match request {
            SequenceRequest::Identify => self.identify().await,
            SequenceRequest::FactoryReset => self.factory_reset().await,
        }
        request
    }

    async fn identify(&mut self) {
        self.strip.begin_override();
        for _ in 0..IDENTIFY_GROUPS {
            for _ in 0..IDENTIFY_BLINKS {
                self.strip.override_indicator(true);
                self.strip.override_fill(IDENTIFY_COLOR);
                self.wait(self.timings.blink_on).await;
                self.strip.override_indicator(false);
                self.strip.override_fill(BLACK);
                self.wait(self.timings.blink_off).await;
            }
            self.wait(self.timings.identify_pause).await;
        }
        self.strip.end_override();
        self.queue.finish_identify();
    }

    async fn factory_reset(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("reset: starting factory reset");

        self.strip.begin_override();
        for _ in 0..RESET_WARNING_BLINKS {
            self.strip.override_indicator(true);
            self.wait(self.timings.blink_on).await;
            self.strip.override_indicator(false);
            self.wait(self.timings.blink_off).await;
        }

        #[cfg(feature = "esp32-log")]
        println!("reset: network config");
        self.reset.network.reset_network_config();
        self.wait(self.timings.reset_step).await;

        #[cfg(feature = "esp32-log")]
        println!("reset: pairing state");
        self.reset.pairing.reset_pairing();
        self.wait(self.timings.reset_step).await;

        #[cfg(feature = "esp32-log")]
        println!("reset: restarting");
        self.reset.system.restart();
    }

    async fn wait(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms).await;
    }
}
