//! Text layout of a word line
//!
//! Twelve 8-pixel cells per scanline: `L:HHHH-LLLL ` where `L` is the line
//! index, the two hex groups are the high and low 16-bit halves of the
//! word (most significant nibble first), and the last cell is left blank.

use crate::config::{CELLS_PER_LINE, TEXT_LINES};
use crate::font::Glyph;

/// Cell holding the line index digit
pub const INDEX_CELL: usize = 0;
/// Cell holding the colon
pub const COLON_CELL: usize = 1;
/// First cell of the high half
pub const HIGH_CELL: usize = 2;
/// Cell holding the dash between the halves
pub const DASH_CELL: usize = 6;
/// First cell of the low half
pub const LOW_CELL: usize = 7;

/// Contents of one character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    /// No ink
    Blank,
    /// A glyph from the font
    Glyph(Glyph),
}

impl Cell {
    /// Character shown in this cell, space when blank
    pub const fn as_char(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::Glyph(glyph) => glyph.as_char(),
        }
    }
}

/// Lay out `value` for text line `line` (masked to 0-7)
pub fn compose_cells(line: u8, value: u32) -> [Cell; CELLS_PER_LINE] {
    let mut cells = [Cell::Blank; CELLS_PER_LINE];

    cells[INDEX_CELL] = Cell::Glyph(Glyph::hex(line & (TEXT_LINES - 1)));
    cells[COLON_CELL] = Cell::Glyph(Glyph::Colon);
    cells[DASH_CELL] = Cell::Glyph(Glyph::Dash);

    let high = (value >> 16) as u16;
    let low = value as u16;
    for nibble in 0..4 {
        let shift = 12 - 4 * nibble;
        cells[HIGH_CELL + nibble] = Cell::Glyph(Glyph::hex((high >> shift) as u8));
        cells[LOW_CELL + nibble] = Cell::Glyph(Glyph::hex((low >> shift) as u8));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    fn render(cells: &[Cell]) -> String {
        cells.iter().map(|c| c.as_char()).collect()
    }

    #[test]
    fn test_layout() {
        assert_eq!(render(&compose_cells(0, 0x2345_ABCD)), "0:2345-ABCD ");
        assert_eq!(render(&compose_cells(2, 0xDEAD_BEEF)), "2:DEAD-BEEF ");
        assert_eq!(render(&compose_cells(7, 0)), "7:0000-0000 ");
    }

    #[test]
    fn test_line_index_is_masked() {
        assert_eq!(compose_cells(9, 0x1234_5678), compose_cells(1, 0x1234_5678));
        assert_eq!(compose_cells(8, 0)[INDEX_CELL], Cell::Glyph(Glyph::Zero));
    }

    #[test]
    fn test_trailing_cell_blank() {
        let cells = compose_cells(3, u32::MAX);
        assert_eq!(cells[CELLS_PER_LINE - 1], Cell::Blank);
        assert_eq!(render(&cells), "3:FFFF-FFFF ");
    }
}
