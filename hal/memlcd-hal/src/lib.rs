//! Memory LCD Hardware Abstraction Layer
//!
//! This crate defines the hardware collaborators the memory LCD driver
//! consumes. A board support crate implements them on top of its chip HAL
//! (pin writes, the SSI/SPI peripheral, a SysTick-style periodic timer).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (demo loop, firmware)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  memlcd (glyphs, commands, VCOM)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  memlcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Select, power and DISP lines
//! - [`spi::SpiBus`] - Byte-at-a-time transmit with a busy query
//! - [`timer::PeriodicTimer`] - Periodic tick with a registered handler
//!
//! Microsecond guard delays use [`embedded_hal::delay::DelayNs`] directly.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{Mode, SpiBus, SpiConfig};
pub use timer::{PeriodicTimer, TickHandler};
