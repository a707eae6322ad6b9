#![allow(dead_code)]

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use myrtio_rgbw_strip::color::Rgbw;
use myrtio_rgbw_strip::ports::{NetworkConfigReset, PairingReset, SystemRestart};
use myrtio_rgbw_strip::{
    DEFAULT_LED_COUNT, FactoryResetPorts, LightAccessory, PixelBus, PixelFormat, SequenceQueue,
    StripConfig,
};

/// Observable side effect of the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Uniform frame submitted to the bus
    Frame(Rgbw),
    PinLow,
    PinHigh,
    /// Cooperative wait in milliseconds
    Wait(u32),
    NetworkReset,
    PairingReset,
    Restart,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub type TestAccessory<'a> = LightAccessory<'a, FakeBus, FakePin, DEFAULT_LED_COUNT>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}

pub fn clear(log: &Log) {
    log.borrow_mut().clear();
}

/// Pin event for a lit indicator on active-low wiring
pub const LIT: Event = Event::PinLow;
/// Pin event for a dark indicator on active-low wiring
pub const DARK: Event = Event::PinHigh;

pub fn accessory<'a>(log: &Log, queue: &'a SequenceQueue) -> TestAccessory<'a> {
    LightAccessory::new(
        FakeBus::new(log),
        FakePin::new(log),
        &StripConfig::default(),
        queue,
    )
}

pub fn reset_ports(log: &Log) -> FactoryResetPorts<FakeNetwork, FakePairing, FakeSystem> {
    FactoryResetPorts {
        network: FakeNetwork(log.clone()),
        pairing: FakePairing(log.clone()),
        system: FakeSystem(log.clone()),
    }
}

pub struct FakeBus {
    log: Log,
}

impl FakeBus {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl PixelBus for FakeBus {
    fn submit(&mut self, pixels: &[Rgbw], format: PixelFormat) {
        assert_eq!(pixels.len(), DEFAULT_LED_COUNT);
        assert_eq!(format, PixelFormat::Rgbw);
        assert!(pixels.iter().all(|pixel| *pixel == pixels[0]));
        self.log.borrow_mut().push(Event::Frame(pixels[0]));
    }
}

pub struct FakePin {
    log: Log,
}

impl FakePin {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::PinLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::PinHigh);
        Ok(())
    }
}

/// Records waits instead of sleeping
pub struct FakeDelay {
    log: Log,
}

impl FakeDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Wait(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Wait(ms));
    }
}

pub struct FakeNetwork(pub Log);

impl NetworkConfigReset for FakeNetwork {
    fn reset_network_config(&mut self) {
        self.0.borrow_mut().push(Event::NetworkReset);
    }
}

pub struct FakePairing(pub Log);

impl PairingReset for FakePairing {
    fn reset_pairing(&mut self) {
        self.0.borrow_mut().push(Event::PairingReset);
    }
}

pub struct FakeSystem(pub Log);

impl SystemRestart for FakeSystem {
    fn restart(&mut self) {
        self.0.borrow_mut().push(Event::Restart);
    }
}
