//! Driver errors

use crate::config::ConfigError;

/// Errors from display operations
///
/// `E` is the error type of the SPI bus implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus rejected a byte
    Bus(E),
    /// The bus stayed busy past the configured poll limit
    BusTimeout,
    /// Invalid configuration passed to `init`
    Config(ConfigError),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::BusTimeout => f.write_str("bus stayed busy"),
            Error::Config(e) => write!(f, "invalid configuration: {:?}", e),
        }
    }
}
