//! VCOM tick task for embassy executors
//!
//! Replaces a hardware timer interrupt with an embassy `Ticker`. The task
//! calls the same [`Vcom::on_tick`] path an interrupt handler would.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use embedded_hal::delay::DelayNs;
use memlcd_hal::{OutputPin, SpiBus};

use crate::config::{Config, ConfigError};
use crate::vcom::{TickOutcome, Vcom};

/// Signal that ends [`vcom_task`]
pub type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// Tick VCOM every `config.vcom_period_ms` until `stop` is signalled
///
/// Returns the number of ticks whose toggle failed on the bus. An invalid
/// configuration is rejected before the first tick.
pub async fn vcom_task<BUS, CS, D>(
    vcom: &Vcom<BUS, CS, D>,
    config: &Config,
    stop: &StopSignal,
) -> Result<u32, ConfigError>
where
    BUS: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    config.validate()?;

    #[cfg(feature = "defmt")]
    defmt::info!("VCOM task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.vcom_period_ms as u64));
    let mut failures = 0u32;

    loop {
        match select(ticker.next(), stop.wait()).await {
            Either::First(()) => {
                if vcom.on_tick() == TickOutcome::Failed {
                    failures = failures.saturating_add(1);
                }
            }
            Either::Second(()) => break,
        }
    }

    #[cfg(feature = "defmt")]
    defmt::info!("VCOM task stopped");
    Ok(failures)
}
