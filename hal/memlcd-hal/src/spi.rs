//! SPI bus abstractions
//!
//! The memory LCD is write-only, and its select line is driven by the
//! driver rather than the peripheral, so the bus is modelled the way a
//! TX FIFO is used: queue one byte, then poll the busy flag.

/// Transmit-only SPI master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Apply clock rate and mode
    ///
    /// Called once during display initialization, before the first byte.
    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error>;

    /// Queue one byte for transmission
    ///
    /// Callers wait for [`SpiBus::is_busy`] to clear before queuing the
    /// next byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// True while a byte is still being shifted out
    fn is_busy(&self) -> bool;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn configure(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        T::configure(self, config)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::write_byte(self, byte)
    }

    fn is_busy(&self) -> bool {
        T::is_busy(self)
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Bits per frame
    pub frame_bits: u8,
}

impl SpiConfig {
    /// 1 MHz, mode 0, 8-bit frames
    pub const MEMORY_LCD: Self = Self {
        frequency: 1_000_000,
        mode: Mode::Mode0,
        frame_bits: 8,
    };
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::MEMORY_LCD
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}
