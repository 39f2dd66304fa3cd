//! Glyph table
//!
//! Lucida Console derived bitmaps, 9 rows by up to 8 pixels, MSB is the
//! leftmost pixel and a set bit is ink. Only hex digits, colon and dash
//! exist; anything else cannot be expressed as a [`Glyph`].

/// Rows per glyph
pub const GLYPH_ROWS: usize = 9;

/// One glyph bitmap, top row first
pub type Bitmap = [u8; GLYPH_ROWS];

/// Characters the font can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Glyph {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    A,
    B,
    C,
    D,
    E,
    F,
    Colon,
    Dash,
}

/// Hex digits in nibble order
const HEX: [Glyph; 16] = [
    Glyph::Zero,
    Glyph::One,
    Glyph::Two,
    Glyph::Three,
    Glyph::Four,
    Glyph::Five,
    Glyph::Six,
    Glyph::Seven,
    Glyph::Eight,
    Glyph::Nine,
    Glyph::A,
    Glyph::B,
    Glyph::C,
    Glyph::D,
    Glyph::E,
    Glyph::F,
];

impl Glyph {
    /// Glyph for the low nibble of `value`
    pub const fn hex(value: u8) -> Self {
        HEX[(value & 0x0F) as usize]
    }

    /// Look up a glyph by character; hex letters may be either case
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self::hex(ch as u8 - b'0')),
            'A'..='F' => Some(Self::hex(ch as u8 - b'A' + 10)),
            'a'..='f' => Some(Self::hex(ch as u8 - b'a' + 10)),
            ':' => Some(Self::Colon),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }

    /// Character this glyph draws (hex letters upper case)
    pub const fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Dash => '-',
            digit => {
                let n = digit as u8;
                if n < 10 {
                    (b'0' + n) as char
                } else {
                    (b'A' + n - 10) as char
                }
            }
        }
    }

    /// Bitmap rows, top first
    pub fn bitmap(self) -> &'static Bitmap {
        &FONT[self as usize]
    }

    /// One row of the bitmap
    ///
    /// `row` must be below [`GLYPH_ROWS`].
    pub fn row(self, row: usize) -> u8 {
        FONT[self as usize][row]
    }
}

/// Bitmaps indexed by `Glyph as usize`
static FONT: [Bitmap; 18] = [
    // '0'
    [0x30, 0x48, 0x84, 0x84, 0x84, 0x84, 0x84, 0x48, 0x78],
    // '1'
    [0x30, 0xD0, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0xFE],
    // '2'
    [0xF0, 0x08, 0x08, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8],
    // '3'
    [0xF0, 0x08, 0x08, 0x10, 0x60, 0x18, 0x08, 0x08, 0xF0],
    // '4'
    [0x08, 0x18, 0x28, 0x28, 0x48, 0x88, 0xFC, 0x08, 0x08],
    // '5'
    [0xFC, 0x80, 0x80, 0xF8, 0x04, 0x04, 0x04, 0x04, 0xF8],
    // '6'
    [0x38, 0x40, 0x80, 0xB8, 0xC4, 0x84, 0x84, 0x44, 0x38],
    // '7'
    [0xFC, 0x04, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40],
    // '8'
    [0x78, 0x84, 0x84, 0x48, 0x78, 0x8C, 0x84, 0x84, 0x78],
    // '9'
    [0x78, 0x84, 0x84, 0x84, 0x7C, 0x04, 0x04, 0x08, 0x70],
    // 'A'
    [0x00, 0x30, 0x30, 0x48, 0x48, 0x48, 0xFC, 0x84, 0x84],
    // 'B'
    [0x00, 0xFC, 0x82, 0x82, 0xFC, 0x82, 0x82, 0x82, 0xFC],
    // 'C'
    [0x00, 0x3E, 0x40, 0x80, 0x80, 0x80, 0x80, 0x40, 0x3E],
    // 'D'
    [0x00, 0xF8, 0x84, 0x82, 0x82, 0x82, 0x82, 0x84, 0xF8],
    // 'E'
    [0x00, 0xFC, 0x80, 0x80, 0x80, 0xF8, 0x80, 0x80, 0xFC],
    // 'F'
    [0x00, 0xFC, 0x80, 0x80, 0x80, 0xF8, 0x80, 0x80, 0x80],
    // ':'
    [0x00, 0x00, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0xC0, 0xC0],
    // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00],
];
