//! Word display API
//!
//! Eight text lines, each showing one 32-bit word. A text line is 11
//! scanlines: 9 glyph rows and 2 blank rows that also wipe whatever an
//! earlier, taller write left behind.

use embedded_hal::delay::DelayNs;
use memlcd_hal::{OutputPin, PeriodicTimer, SpiBus, TickHandler};

use crate::command::{LineCommand, Opcode, ShortCommand};
use crate::config::{Config, SCANLINES_PER_TEXT_LINE, TEXT_LINES, TOP_MARGIN};
use crate::error::Error;
use crate::font::GLYPH_ROWS;
use crate::text;
use crate::vcom::Vcom;

/// Panel supply and display-enable lines
pub struct PanelPins<PWR, DISP> {
    /// Switches the panel supply
    pub power: PWR,
    /// DISP: high shows the memory contents, low blanks the panel
    pub disp: DISP,
}

/// First scanline of text line `line` (masked to 0-7)
pub const fn first_row(line: u8) -> u8 {
    (line & (TEXT_LINES - 1)) * SCANLINES_PER_TEXT_LINE + TOP_MARGIN
}

/// Hex word display on a Sharp 96x96 memory LCD
pub struct Display<'a, BUS, CS, D, PWR, DISP> {
    vcom: &'a Vcom<BUS, CS, D>,
    pins: PanelPins<PWR, DISP>,
    config: Config,
    tick: TickHandler,
    line: LineCommand,
}

impl<'a, BUS, CS, D, PWR, DISP> Display<'a, BUS, CS, D, PWR, DISP>
where
    BUS: SpiBus,
    CS: OutputPin,
    D: DelayNs,
    PWR: OutputPin,
    DISP: OutputPin,
{
    /// Create the display
    ///
    /// `tick` is registered with the timer in [`Display::init`] and must
    /// call [`Vcom::on_tick`] on the same `vcom`.
    pub fn new(
        vcom: &'a Vcom<BUS, CS, D>,
        pins: PanelPins<PWR, DISP>,
        config: Config,
        tick: TickHandler,
    ) -> Self {
        Self {
            vcom,
            pins,
            config,
            tick,
            line: LineCommand::new(),
        }
    }

    /// Power the panel, set up the bus and start VCOM inversion
    ///
    /// Must run once before any other operation.
    pub fn init<T: PeriodicTimer>(&mut self, timer: &mut T) -> Result<(), Error<BUS::Error>> {
        self.config.validate()?;

        {
            let mut link = self.vcom.acquire();
            link.set_config(&self.config);
            self.vcom.release(link)?;
        }

        self.pins.power.set_high();
        self.pins.disp.set_high();
        self.vcom.configure(&self.config.bus)?;

        timer.start(self.config.vcom_period_ms, self.tick);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "memory LCD up: {} Hz bus, VCOM tick {} ms",
            self.config.bus.frequency,
            self.config.vcom_period_ms
        );
        Ok(())
    }

    /// Stop VCOM inversion and switch the panel off
    pub fn power_off<T: PeriodicTimer>(&mut self, timer: &mut T) {
        timer.stop();
        self.pins.disp.set_low();
        self.pins.power.set_low();
    }

    /// Clear every pixel
    pub fn clear_screen(&mut self) -> Result<(), Error<BUS::Error>> {
        self.vcom.transmit(&mut ShortCommand::new(Opcode::ClearScreen))
    }

    /// Show `value` as `L:HHHH-LLLL` on text line `line`
    ///
    /// `line` is masked to 0-7, so 9 draws on line 1.
    pub fn write_word(&mut self, line: u8, value: u32) -> Result<(), Error<BUS::Error>> {
        let cells = text::compose_cells(line, value);
        let top = first_row(line);

        for glyph_row in 0..GLYPH_ROWS {
            self.line.set_row(top + glyph_row as u8);
            self.line.set_cells(&cells, glyph_row);
            self.vcom.transmit(&mut self.line)?;
        }

        self.line.set_blank();
        for gap in (GLYPH_ROWS as u8)..SCANLINES_PER_TEXT_LINE {
            self.line.set_row(top + gap);
            self.vcom.transmit(&mut self.line)?;
        }
        Ok(())
    }

    /// Write several `(line, value)` pairs in order
    pub fn write_words(&mut self, words: &[(u8, u32)]) -> Result<(), Error<BUS::Error>> {
        for &(line, value) in words {
            self.write_word(line, value)?;
        }
        Ok(())
    }

    /// VCOM ticks since init or the last reset
    pub fn ticks(&self) -> u32 {
        self.vcom.ticks()
    }

    /// Restart the tick count from zero
    pub fn reset_ticks(&self) {
        self.vcom.reset_ticks()
    }

    /// Shared VCOM state
    pub fn vcom(&self) -> &'a Vcom<BUS, CS, D> {
        self.vcom
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the panel lines
    pub fn into_pins(self) -> PanelPins<PWR, DISP> {
        self.pins
    }
}
