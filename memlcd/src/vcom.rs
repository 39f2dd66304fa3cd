//! VCOM inversion scheduler
//!
//! The panel needs its common electrode polarity flipped at least once a
//! second. A periodic tick (every 500 ms by default) flips the VCOM level
//! and posts a toggle. If the link is free the tick sends the toggle
//! command itself; if a transaction is on the wire, that transaction sends
//! it when it releases the link.
//!
//! ```text
//!              tick: flip, send toggle
//!             ┌──────┐
//!             ▼      │
//!         ┌────────────┐   acquire    ┌──────────────┐
//!         │    Idle    │ ───────────▶ │ Transmitting │ ◀─┐ tick: flip,
//!         └────────────┘ ◀─────────── └──────────────┘ ──┘ defer toggle
//!                    release: send deferred toggles
//! ```
//!
//! The link mutex is the "select asserted" state. Ticks only ever
//! `try_lock` it, so the interrupt never waits on the foreground.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embedded_hal::delay::DelayNs;
use memlcd_hal::{OutputPin, SpiBus, SpiConfig};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::command::{self, Frame};
use crate::error::Error;
use crate::link::Link;

/// Exclusive access to the link for one or more transactions
pub type LinkGuard<'a, BUS, CS, D> = MutexGuard<'a, CriticalSectionRawMutex, Link<BUS, CS, D>>;

/// What a tick did with the VCOM change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Toggle command sent from the tick
    Sent,
    /// Link busy; the current transaction sends the toggle
    Deferred,
    /// Toggle command failed on the bus
    Failed,
}

/// Polarity state shared between the foreground and the tick interrupt
pub struct Vcom<BUS, CS, D> {
    link: Mutex<CriticalSectionRawMutex, Link<BUS, CS, D>>,
    /// Current VCOM level
    polarity: AtomicBool,
    /// A tick found the link busy and left its toggle to the holder
    deferred: AtomicBool,
    /// Mirrors link ownership for observers
    transmitting: AtomicBool,
    /// Free-running tick count, resettable by the application
    ticks: AtomicU32,
}

impl<BUS, CS, D> Vcom<BUS, CS, D> {
    /// Wrap a link; VCOM starts high
    pub const fn new(link: Link<BUS, CS, D>) -> Self {
        Self {
            link: Mutex::new(link),
            polarity: AtomicBool::new(true),
            deferred: AtomicBool::new(false),
            transmitting: AtomicBool::new(false),
            ticks: AtomicU32::new(0),
        }
    }

    /// Current VCOM level
    pub fn polarity(&self) -> bool {
        self.polarity.load(Ordering::Acquire)
    }

    /// True while a transaction owns the link
    pub fn is_transmitting(&self) -> bool {
        self.transmitting.load(Ordering::Acquire)
    }

    /// Ticks since start or the last reset
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Restart the tick count from zero
    pub fn reset_ticks(&self) {
        self.ticks.store(0, Ordering::Relaxed);
    }

    /// Read and reset the tick count in one step
    pub fn take_ticks(&self) -> u32 {
        self.ticks.swap(0, Ordering::Relaxed)
    }

    /// Take the link back out, e.g. to power the bus down
    pub fn into_link(self) -> Link<BUS, CS, D> {
        self.link.into_inner()
    }
}

impl<BUS, CS, D> Vcom<BUS, CS, D>
where
    BUS: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Timer interrupt entry point
    ///
    /// Counts the tick, flips VCOM and gets the new level onto the wire.
    /// Bus failures are logged rather than returned; there is nobody to
    /// return them to.
    pub fn on_tick(&self) -> TickOutcome {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        self.polarity.fetch_xor(true, Ordering::AcqRel);

        // Post the toggle first: whoever holds the link now, or takes it
        // next, is guaranteed to see it on release.
        self.deferred.store(true, Ordering::Release);

        let Some(link) = self.try_acquire() else {
            #[cfg(feature = "defmt")]
            defmt::trace!("VCOM toggle deferred");
            return TickOutcome::Deferred;
        };

        match self.release(link) {
            Ok(()) => TickOutcome::Sent,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("VCOM toggle failed");
                TickOutcome::Failed
            }
        }
    }

    /// Send one command built against the current VCOM level
    ///
    /// The frame is finalized with the link held, so no tick can slip in
    /// between reading the level and the bytes leaving; a tick during the
    /// transfer is caught by the deferred toggle on release.
    pub fn transmit<F>(&self, frame: &mut F) -> Result<(), Error<BUS::Error>>
    where
        F: Frame + ?Sized,
    {
        let mut link = self.acquire();
        let sent = link.transmit(frame.finalize(self.polarity()));
        let released = self.release(link);
        sent.and(released)
    }

    /// Reset select and configure the bus
    pub fn configure(&self, bus: &SpiConfig) -> Result<(), Error<BUS::Error>> {
        let mut link = self.acquire();
        let reset = link.reset(bus);
        reset.and(self.release(link))
    }

    /// Take the link, spinning while another context holds it
    pub fn acquire(&self) -> LinkGuard<'_, BUS, CS, D> {
        loop {
            if let Some(link) = self.try_acquire() {
                return link;
            }
            core::hint::spin_loop();
        }
    }

    fn try_acquire(&self) -> Option<LinkGuard<'_, BUS, CS, D>> {
        let link = self.link.try_lock().ok()?;
        self.transmitting.store(true, Ordering::Release);
        Some(link)
    }

    /// Give the link back, first sending any toggle deferred while held
    ///
    /// A tick landing between the last drain and the unlock sets the
    /// deferred flag after we looked, so the flag is checked again once
    /// the lock is gone and the link retaken if it is still free.
    pub fn release<'s>(
        &'s self,
        mut link: LinkGuard<'s, BUS, CS, D>,
    ) -> Result<(), Error<BUS::Error>> {
        loop {
            let flushed = self.flush_deferred(&mut link);
            self.transmitting.store(false, Ordering::Release);
            drop(link);
            flushed?;

            if !self.deferred.load(Ordering::Acquire) {
                return Ok(());
            }
            link = match self.try_acquire() {
                Some(link) => link,
                // Whoever holds it now drains the flag on its own release
                None => return Ok(()),
            };
        }
    }

    fn flush_deferred(&self, link: &mut Link<BUS, CS, D>) -> Result<(), Error<BUS::Error>> {
        while self.deferred.swap(false, Ordering::AcqRel) {
            #[cfg(feature = "defmt")]
            defmt::trace!("sending deferred VCOM toggle");
            if let Err(e) = link.transmit(&command::toggle_vcom(self.polarity())) {
                // Still owed; the next release retries it
                self.deferred.store(true, Ordering::Release);
                return Err(e);
            }
        }
        Ok(())
    }
}
