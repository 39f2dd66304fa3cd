//! Panel geometry and driver configuration
//!
//! Timing values are the LS013B7DH-class memory LCD interface limits:
//! - tsSCS: SCS high to first SCLK edge, 6 µs minimum
//! - thSCS: last SCLK edge to SCS low, 2 µs minimum
//! - twSCSL: SCS low width between transfers, 2 µs minimum

use memlcd_hal::SpiConfig;

/// Scanlines on the panel
pub const PANEL_ROWS: u8 = 96;

/// Pixel columns on the panel
pub const PANEL_COLUMNS: usize = 96;

/// 8-pixel character cells per scanline
pub const CELLS_PER_LINE: usize = PANEL_COLUMNS / 8;

/// Text lines addressable by `write_word`
pub const TEXT_LINES: u8 = 8;

/// Scanlines per text line: 9 glyph rows plus 2 blank separator rows
pub const SCANLINES_PER_TEXT_LINE: u8 = 11;

/// Blank scanlines above the first text line
pub const TOP_MARGIN: u8 = 4;

/// Slowest allowed VCOM tick; each tick flips VCOM once, so two ticks
/// must fit in the 1 s inversion period
pub const MAX_VCOM_PERIOD_MS: u32 = 500;

/// Guard delays around a select-line assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Select asserted to first byte
    pub setup_us: u32,
    /// Last byte finished to select deasserted
    pub hold_us: u32,
    /// Select deasserted to next assertion
    pub release_us: u32,
}

impl Timing {
    /// Datasheet minimums for the 96x96 panel
    pub const SHARP_96X96: Self = Self {
        setup_us: 6,
        hold_us: 2,
        release_us: 2,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::SHARP_96X96
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Select-line guard delays
    pub timing: Timing,
    /// Bus clock and mode applied at init
    pub bus: SpiConfig,
    /// VCOM tick period in milliseconds (half the inversion period)
    pub vcom_period_ms: u32,
    /// Busy polls tolerated per byte before giving up with `BusTimeout`
    pub busy_poll_limit: u32,
}

impl Config {
    /// Defaults for the Sharp 96x96 booster pack
    pub const DEFAULT: Self = Self {
        timing: Timing::SHARP_96X96,
        bus: SpiConfig::MEMORY_LCD,
        vcom_period_ms: 500,
        // A byte at 1 MHz is 8 µs; this is orders of magnitude more polls
        // than any working bus needs.
        busy_poll_limit: 1_000_000,
    };

    /// Check the configuration against the panel's hard limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vcom_period_ms == 0 {
            return Err(ConfigError::ZeroVcomPeriod);
        }
        if self.vcom_period_ms > MAX_VCOM_PERIOD_MS {
            return Err(ConfigError::VcomPeriodTooLong);
        }
        if self.timing.setup_us < Timing::SHARP_96X96.setup_us
            || self.timing.hold_us < Timing::SHARP_96X96.hold_us
            || self.timing.release_us < Timing::SHARP_96X96.release_us
        {
            return Err(ConfigError::TimingBelowMinimum);
        }
        if self.busy_poll_limit == 0 {
            return Err(ConfigError::ZeroPollLimit);
        }
        if self.bus.frequency == 0 {
            return Err(ConfigError::ZeroBusFrequency);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration rejected by [`Config::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// VCOM period of zero
    ZeroVcomPeriod,
    /// VCOM period too long to invert at 1 Hz
    VcomPeriodTooLong,
    /// A guard delay is shorter than the panel allows
    TimingBelowMinimum,
    /// Busy-wait would fail before the first poll
    ZeroPollLimit,
    /// Bus clock of zero
    ZeroBusFrequency,
}
