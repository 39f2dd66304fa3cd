//! Select-framed serial link to the panel
//!
//! One call to [`Link::transmit`] is one transaction:
//!
//! ```text
//! SCS  ___/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\_________
//!         |<-setup->|byte|byte|...|<-hold->|<-release->|
//! ```
//!
//! Each byte waits for the bus to go idle before being queued, and the
//! last byte must have left the shifter before the hold delay starts.

use embedded_hal::delay::DelayNs;
use memlcd_hal::{OutputPin, SpiBus, SpiConfig};

use crate::config::{Config, Timing};
use crate::error::Error;

/// Bus, select line and delay source
pub struct Link<BUS, CS, D> {
    bus: BUS,
    cs: CS,
    delay: D,
    timing: Timing,
    busy_poll_limit: u32,
}

impl<BUS, CS, D> Link<BUS, CS, D> {
    /// Create a link; usable in `static` initializers
    pub const fn new(bus: BUS, cs: CS, delay: D, config: &Config) -> Self {
        Self {
            bus,
            cs,
            delay,
            timing: config.timing,
            busy_poll_limit: config.busy_poll_limit,
        }
    }

    /// Replace the guard delays and poll limit
    pub fn set_config(&mut self, config: &Config) {
        self.timing = config.timing;
        self.busy_poll_limit = config.busy_poll_limit;
    }

    /// Guard delays in use
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Give back the collaborators
    pub fn into_parts(self) -> (BUS, CS, D) {
        (self.bus, self.cs, self.delay)
    }
}

impl<BUS, CS, D> Link<BUS, CS, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Drive select low and apply the bus configuration
    pub fn reset(&mut self, bus: &SpiConfig) -> Result<(), Error<BUS::Error>> {
        self.cs.set_low();
        self.bus.configure(bus).map_err(Error::Bus)
    }

    /// True while a transaction holds the select line
    pub fn is_selected(&self) -> bool {
        self.cs.is_set_high()
    }

    /// Send `bytes` as one select-framed transaction
    ///
    /// Select is released with full hold and release delays even when the
    /// bus fails part way, so the next transaction starts from a clean frame.
    pub fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error<BUS::Error>> {
        self.cs.set_high();
        self.delay.delay_us(self.timing.setup_us);

        let sent = self.shift_out(bytes);

        self.delay.delay_us(self.timing.hold_us);
        self.cs.set_low();
        self.delay.delay_us(self.timing.release_us);

        sent
    }

    fn shift_out(&mut self, bytes: &[u8]) -> Result<(), Error<BUS::Error>> {
        for &byte in bytes {
            self.wait_idle()?;
            self.bus.write_byte(byte).map_err(Error::Bus)?;
        }
        self.wait_idle()
    }

    /// Spin until the bus is idle, bounded by the poll limit
    fn wait_idle(&mut self) -> Result<(), Error<BUS::Error>> {
        let mut polls = 0u32;
        while self.bus.is_busy() {
            polls += 1;
            if polls >= self.busy_poll_limit {
                #[cfg(feature = "defmt")]
                defmt::warn!("SPI busy after {} polls", polls);
                return Err(Error::BusTimeout);
            }
            core::hint::spin_loop();
        }
        Ok(())
    }
}
