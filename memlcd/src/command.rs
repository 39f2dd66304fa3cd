//! Memory LCD wire commands
//!
//! Every command starts with a mode byte whose top bits select the
//! operation and whose bit 6 carries the current VCOM level, and ends with
//! zero trailer bytes that clock the panel's internal latch.

use crate::bits;
use crate::config::CELLS_PER_LINE;
use crate::text::Cell;

/// VCOM level in the mode byte
pub const VCOM_BIT: u8 = 0x40;

/// Dummy byte closing every command
pub const TRAILER: u8 = 0x00;

/// Pixel byte with all eight pixels clear (the panel is active low)
pub const WHITE: u8 = 0xFF;

/// Length of a single-line write command
pub const LINE_COMMAND_LEN: usize = 2 + CELLS_PER_LINE + 2;

/// Length of the clear and VCOM-only commands
pub const SHORT_COMMAND_LEN: usize = 2;

/// Offset of the first pixel byte in a line command
const PIXELS: usize = 2;

/// Mode byte operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Refresh VCOM only
    ToggleVcom = 0x00,
    /// Clear all pixels
    ClearScreen = 0x20,
    /// Write one or more lines
    WriteLine = 0x80,
}

impl Opcode {
    /// Mode byte for this operation at the given VCOM level
    pub const fn with_vcom(self, vcom: bool) -> u8 {
        let base = self as u8 & !VCOM_BIT;
        if vcom {
            base | VCOM_BIT
        } else {
            base
        }
    }
}

/// A command whose mode byte is completed at send time
///
/// `finalize` merges the VCOM level into the mode byte and returns the
/// bytes to put on the wire. It is called with the link already held.
pub trait Frame {
    fn finalize(&mut self, vcom: bool) -> &[u8];
}

/// Two-byte VCOM refresh command
pub const fn toggle_vcom(vcom: bool) -> [u8; SHORT_COMMAND_LEN] {
    [Opcode::ToggleVcom.with_vcom(vcom), TRAILER]
}

/// Mode byte plus trailer (clear screen, VCOM refresh)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCommand {
    opcode: Opcode,
    buf: [u8; SHORT_COMMAND_LEN],
}

impl ShortCommand {
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            buf: [opcode.with_vcom(false), TRAILER],
        }
    }
}

impl Frame for ShortCommand {
    fn finalize(&mut self, vcom: bool) -> &[u8] {
        self.buf[0] = self.opcode.with_vcom(vcom);
        &self.buf
    }
}

/// Write-line command buffer
///
/// Layout: mode byte, bit-reversed row address, 12 pixel bytes, two
/// trailer bytes. The buffer is reused for every scanline; only the
/// address, the pixels and the VCOM bit change between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCommand {
    buf: [u8; LINE_COMMAND_LEN],
}

impl Default for LineCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCommand {
    /// Blank line command for row 0
    pub const fn new() -> Self {
        let mut buf = [WHITE; LINE_COMMAND_LEN];
        buf[0] = Opcode::WriteLine.with_vcom(false);
        buf[1] = 0;
        buf[LINE_COMMAND_LEN - 2] = TRAILER;
        buf[LINE_COMMAND_LEN - 1] = TRAILER;
        Self { buf }
    }

    /// Set the target scanline (0-95)
    pub fn set_row(&mut self, row: u8) {
        debug_assert!(row < crate::config::PANEL_ROWS);
        self.buf[1] = bits::reverse(row);
    }

    /// Target scanline as currently encoded
    pub fn row(&self) -> u8 {
        bits::reverse(self.buf[1])
    }

    /// Draw row `glyph_row` of each cell's glyph
    ///
    /// Pixel bytes are the complement of the bitmap: ink is a 0 on the wire.
    pub fn set_cells(&mut self, cells: &[Cell; CELLS_PER_LINE], glyph_row: usize) {
        for (byte, cell) in self.buf[PIXELS..PIXELS + CELLS_PER_LINE].iter_mut().zip(cells) {
            *byte = match cell {
                Cell::Blank => WHITE,
                Cell::Glyph(glyph) => !glyph.row(glyph_row),
            };
        }
    }

    /// Clear every pixel on the line
    pub fn set_blank(&mut self) {
        self.buf[PIXELS..PIXELS + CELLS_PER_LINE].fill(WHITE);
    }

    /// Pixel bytes as they go on the wire
    pub fn pixels(&self) -> &[u8] {
        &self.buf[PIXELS..PIXELS + CELLS_PER_LINE]
    }

    /// Current wire bytes
    pub fn as_bytes(&self) -> &[u8; LINE_COMMAND_LEN] {
        &self.buf
    }
}

impl Frame for LineCommand {
    fn finalize(&mut self, vcom: bool) -> &[u8] {
        self.buf[0] = Opcode::WriteLine.with_vcom(vcom);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Glyph;
    use proptest::prelude::*;

    #[test]
    fn test_short_commands() {
        assert_eq!(toggle_vcom(false), [0x00, 0x00]);
        assert_eq!(toggle_vcom(true), [0x40, 0x00]);
    }

    #[test]
    fn test_short_command_frame() {
        let mut clear = ShortCommand::new(Opcode::ClearScreen);
        assert_eq!(clear.finalize(true), &[0x60, 0x00]);
        assert_eq!(clear.finalize(false), &[0x20, 0x00]);

        let mut toggle = ShortCommand::new(Opcode::ToggleVcom);
        assert_eq!(toggle.finalize(true), &toggle_vcom(true));
    }

    #[test]
    fn test_write_line_mode_byte() {
        assert_eq!(Opcode::WriteLine.with_vcom(false), 0x80);
        assert_eq!(Opcode::WriteLine.with_vcom(true), 0xC0);
    }

    #[test]
    fn test_new_line_is_blank() {
        let line = LineCommand::new();
        let bytes = line.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[0], 0x80);
        assert!(line.pixels().iter().all(|&b| b == WHITE));
        assert_eq!(&bytes[14..], &[TRAILER, TRAILER]);
    }

    #[test]
    fn test_row_is_reversed() {
        let mut line = LineCommand::new();
        line.set_row(4);
        assert_eq!(line.as_bytes()[1], 0x20);
        assert_eq!(line.row(), 4);
    }

    #[test]
    fn test_cells_are_complemented() {
        let mut cells = [Cell::Blank; CELLS_PER_LINE];
        cells[0] = Cell::Glyph(Glyph::One);
        cells[1] = Cell::Glyph(Glyph::Colon);

        let mut line = LineCommand::new();
        line.set_cells(&cells, 8);
        assert_eq!(line.pixels()[0], !0xFE);
        assert_eq!(line.pixels()[1], !0xC0);
        assert_eq!(line.pixels()[2], WHITE);

        cells[2] = Cell::Glyph(Glyph::Dash);
        line.set_cells(&cells, 5);
        assert_eq!(line.pixels()[0], !0x10);
        assert_eq!(line.pixels()[2], 0x03);

        line.set_blank();
        assert!(line.pixels().iter().all(|&b| b == WHITE));
    }

    #[test]
    fn test_finalize_tracks_vcom() {
        let mut line = LineCommand::new();
        assert_eq!(line.finalize(true)[0], 0xC0);
        assert_eq!(line.finalize(false)[0], 0x80);
    }

    proptest! {
        #[test]
        fn prop_line_shape(row in 0u8..96, glyph in 0u8..16, glyph_row in 0usize..9, vcom in any::<bool>()) {
            let mut line = LineCommand::new();
            line.set_row(row);
            line.set_cells(&[Cell::Glyph(Glyph::hex(glyph)); CELLS_PER_LINE], glyph_row);
            let bytes = line.finalize(vcom);

            prop_assert_eq!(bytes.len(), LINE_COMMAND_LEN);
            prop_assert_eq!(bytes[0] & VCOM_BIT != 0, vcom);
            prop_assert_eq!(bytes[0] & !VCOM_BIT, 0x80);
            prop_assert_eq!(bits::reverse(bytes[1]), row);
            prop_assert_eq!(&bytes[14..], &[0u8, 0u8][..]);
        }
    }
}
