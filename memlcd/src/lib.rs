//! Hex word display driver for the Sharp 96x96 memory LCD
//!
//! The panel is used as a debug readout: eight text lines, each showing a
//! line index and a 32-bit word in hexadecimal (`3:DEAD-BEEF`). Only the
//! glyphs needed for that are stored, and there is no frame buffer; every
//! scanline is composed on the fly into a 16-byte write-line command.
//!
//! - Glyph table and cell layout ([`font`], [`text`])
//! - Wire commands and bit-reversed row addresses ([`command`], [`bits`])
//! - Select-line timing and busy-waiting ([`link`])
//! - VCOM inversion from a timer interrupt ([`vcom`])
//! - Public API ([`display`])
//!
//! # Wiring it up
//!
//! The [`Vcom`] scheduler is shared between the foreground and the timer
//! interrupt, so it normally lives in a `static`. The tick handler is a
//! plain `fn()` that forwards to [`Vcom::on_tick`]:
//!
//! ```ignore
//! static VCOM: Vcom<Ssi2, ScsPin, Cycles> =
//!     Vcom::new(Link::new(Ssi2::new(), ScsPin::new(), Cycles::new(), &Config::DEFAULT));
//!
//! fn vcom_tick() {
//!     VCOM.on_tick();
//! }
//!
//! let mut display = Display::new(&VCOM, PanelPins { power, disp }, Config::DEFAULT, vcom_tick);
//! display.init(&mut systick)?;
//! display.clear_screen()?;
//! display.write_word(0, 0x2345_ABCD)?;
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bits;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod link;
pub mod text;
pub mod vcom;

#[cfg(feature = "embassy")]
pub mod tasks;

#[cfg(test)]
mod mock;

pub use config::{Config, ConfigError, Timing};
pub use display::{Display, PanelPins};
pub use error::Error;
pub use font::Glyph;
pub use link::Link;
pub use text::Cell;
pub use vcom::{TickOutcome, Vcom};
