//! Shift_JIS projection of row-cell ("ku-ten") coordinates.

/// Convert a 1-based row and cell to the Shift_JIS byte pair.
///
/// Callers must validate both values to `1..=94` beforehand; this function
/// does not re-check them. The lead byte skips `0xA0..=0xDF` (half-width
/// katakana) and the trail byte skips `0x7F`.
pub fn kuten_to_sjis(row: u8, cell: u8) -> [u8; 2] {
    debug_assert!((1..=94).contains(&row) && (1..=94).contains(&cell));
    let seq = (u16::from(row) - 1) * 94 + (u16::from(cell) - 1);
    let high = (seq / 188) as u8;
    let low = (seq % 188) as u8;
    let lead = if high < 31 { high + 129 } else { high + 193 };
    let trail = if low < 63 { low + 64 } else { low + 65 };
    [lead, trail]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(kuten_to_sjis(1, 1), [0x81, 0x40]);
        assert_eq!(kuten_to_sjis(1, 63), [0x81, 0x7E]);
        assert_eq!(kuten_to_sjis(1, 64), [0x81, 0x80]);
        assert_eq!(kuten_to_sjis(2, 94), [0x81, 0xFC]);
        assert_eq!(kuten_to_sjis(4, 2), [0x82, 0xA0]);
        assert_eq!(kuten_to_sjis(62, 94), [0x9F, 0xFC]);
        assert_eq!(kuten_to_sjis(63, 1), [0xE0, 0x40]);
        assert_eq!(kuten_to_sjis(94, 94), [0xEF, 0xFC]);
    }

    #[test]
    fn test_byte_ranges() {
        for row in 1..=94 {
            for cell in 1..=94 {
                let [lead, trail] = kuten_to_sjis(row, cell);
                assert!((0x81..=0x9F).contains(&lead) || (0xE0..=0xEF).contains(&lead));
                assert!((0x40..=0xFC).contains(&trail) && trail != 0x7F);
            }
        }
    }
}
