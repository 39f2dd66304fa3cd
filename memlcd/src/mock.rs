//! Host-side doubles for the hardware collaborators
//!
//! Everything the doubles do lands in one shared [`Wire`] log so tests can
//! check ordering across the select line, the bus and the delays.

use std::sync::{Arc, Mutex};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use memlcd_hal::{OutputPin, PeriodicTimer, SpiBus, SpiConfig, TickHandler};

use crate::config::Config;
use crate::link::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinId {
    Select,
    Power,
    Disp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(PinId, bool),
    Byte(u8),
    DelayNs(u32),
    Configure(SpiConfig),
}

#[derive(Debug, Clone, Default)]
pub struct Wire(Arc<Mutex<Vec<Event>>>);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    /// Bytes of each select-framed transaction, in order
    pub fn commands(&self) -> Vec<Vec<u8>> {
        let mut commands = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in self.events() {
            match event {
                Event::Pin(PinId::Select, true) => current = Some(Vec::new()),
                Event::Pin(PinId::Select, false) => {
                    if let Some(bytes) = current.take() {
                        commands.push(bytes);
                    }
                }
                Event::Byte(b) => current.as_mut().expect("byte outside select").push(b),
                _ => {}
            }
        }
        commands
    }

    pub fn pin(&self, id: PinId) -> MockPin {
        MockPin {
            id,
            high: false,
            wire: self.clone(),
        }
    }

    pub fn bus(&self) -> MockBus {
        MockBus {
            wire: self.clone(),
            stuck: false,
            fail_on: None,
            fail_writes: 0,
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { wire: self.clone() }
    }

    pub fn link(&self) -> Link<MockBus, MockPin, MockDelay> {
        self.link_with(self.bus(), &Config::DEFAULT)
    }

    pub fn link_with(&self, bus: MockBus, config: &Config) -> Link<MockBus, MockPin, MockDelay> {
        Link::new(bus, self.pin(PinId::Select), self.delay(), config)
    }
}

pub struct MockPin {
    id: PinId,
    high: bool,
    wire: Wire,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.wire.push(Event::Pin(self.id, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.wire.push(Event::Pin(self.id, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockBus {
    wire: Wire,
    /// Busy flag never clears
    pub stuck: bool,
    /// Reject this byte value
    pub fail_on: Option<u8>,
    /// Reject this many writes, then recover
    pub fail_writes: usize,
}

impl SpiBus for MockBus {
    type Error = BusFault;

    fn configure(&mut self, config: &SpiConfig) -> Result<(), BusFault> {
        self.wire.push(Event::Configure(*config));
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusFault> {
        if self.fail_on == Some(byte) {
            return Err(BusFault);
        }
        if self.fail_writes > 0 {
            self.fail_writes -= 1;
            return Err(BusFault);
        }
        self.wire.push(Event::Byte(byte));
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.stuck
    }
}

pub struct MockDelay {
    wire: Wire,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wire.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.wire.push(Event::DelayNs(us * 1_000));
    }
}

#[derive(Default)]
pub struct MockTimer {
    pub period_ms: Option<u32>,
    pub handler: Option<TickHandler>,
}

impl PeriodicTimer for MockTimer {
    fn start(&mut self, period_ms: u32, handler: TickHandler) {
        self.period_ms = Some(period_ms);
        self.handler = Some(handler);
    }

    fn stop(&mut self) {
        self.period_ms = None;
        self.handler = None;
    }

    fn is_running(&self) -> bool {
        self.period_ms.is_some()
    }
}
