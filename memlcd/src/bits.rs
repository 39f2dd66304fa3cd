//! Bit order helpers
//!
//! The panel clocks the gate (row) address least-significant bit first,
//! while the SPI peripheral shifts MSB first.

/// Nibble with its four bits mirrored, indexed by the nibble value
const REVERSED_NIBBLE: [u8; 16] = [
    0x0, 0x8, 0x4, 0xC, 0x2, 0xA, 0x6, 0xE, 0x1, 0x9, 0x5, 0xD, 0x3, 0xB, 0x7, 0xF,
];

/// Reverse the bit order of a byte (bit 7 <-> bit 0, bit 6 <-> bit 1, ...)
///
/// Runs once per transmitted scanline, so it is a pair of table lookups
/// rather than a loop.
#[inline]
pub const fn reverse(byte: u8) -> u8 {
    (REVERSED_NIBBLE[(byte & 0x0F) as usize] << 4) | REVERSED_NIBBLE[(byte >> 4) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reverse_known_values() {
        assert_eq!(reverse(0x0F), 0xF0);
        assert_eq!(reverse(0x01), 0x80);
        assert_eq!(reverse(0x00), 0x00);
        assert_eq!(reverse(0xFF), 0xFF);
        assert_eq!(reverse(0b1010_0110), 0b0110_0101);
    }

    #[test]
    fn test_reverse_matches_core() {
        for x in 0..=u8::MAX {
            assert_eq!(reverse(x), x.reverse_bits(), "byte {:#04x}", x);
        }
    }

    #[test]
    fn test_row_addresses() {
        // First and last scanlines written by the renderer
        assert_eq!(reverse(4), 0x20);
        assert_eq!(reverse(91), 0xDA);
    }

    proptest! {
        #[test]
        fn prop_reverse_is_involution(x in any::<u8>()) {
            prop_assert_eq!(reverse(reverse(x)), x);
        }

        #[test]
        fn prop_reverse_keeps_popcount(x in any::<u8>()) {
            prop_assert_eq!(reverse(x).count_ones(), x.count_ones());
        }
    }
}
