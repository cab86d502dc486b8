//! Cross-checks the Shift_JIS projection against encoding_rs.

use aozoraconv_core::{Coordinate, is_jis0208, kuten_to_sjis, normalize_backward};
use encoding_rs::SHIFT_JIS;

#[test]
fn test_lead_and_trail_ranges() {
    for row in 1..=94u8 {
        for cell in 1..=94u8 {
            let [lead, trail] = kuten_to_sjis(row, cell);
            assert!((0x81..=0xEF).contains(&lead), "lead {lead:#x} for {row}-{cell}");
            assert!(!(0xA0..=0xDF).contains(&lead));
            assert!((0x40..=0xFC).contains(&trail), "trail {trail:#x} for {row}-{cell}");
            assert_ne!(trail, 0x7F);
        }
    }
}

#[test]
fn test_projection_is_injective() {
    let mut seen = std::collections::HashSet::new();
    for row in 1..=94u8 {
        for cell in 1..=94u8 {
            assert!(seen.insert(kuten_to_sjis(row, cell)));
        }
    }
    assert_eq!(seen.len(), 94 * 94);
}

#[test]
fn test_jis0208_pairs_decode_to_table_characters() {
    for row in 1..=94u8 {
        for cell in 1..=94u8 {
            if !is_jis0208(1, row, cell) {
                continue;
            }
            let bytes = kuten_to_sjis(row, cell);
            let decoded = SHIFT_JIS
                .decode_without_bom_handling_and_without_replacement(&bytes)
                .unwrap_or_else(|| panic!("{row}-{cell} ({}) does not decode", hex::encode(bytes)));
            assert_eq!(decoded.chars().count(), 1);

            // 1-1-17 is OVERLINE in the standard but FULLWIDTH MACRON in code page 932.
            if (row, cell) == (1, 17) {
                assert_eq!(decoded, "\u{FFE3}");
                continue;
            }
            let coord = Coordinate::new(1, row, cell).unwrap();
            assert_eq!(
                normalize_backward(&decoded),
                coord.to_unicode().unwrap(),
                "mismatch at {coord}"
            );
        }
    }
}

#[test]
fn test_to_sjis_matches_encoder() {
    let coord = Coordinate::new(1, 4, 2).unwrap();
    let (bytes, _, had_errors) = SHIFT_JIS.encode("あ");
    assert!(!had_errors);
    assert_eq!(hex::encode(coord.to_sjis().unwrap()), hex::encode(&bytes[..]));
    assert_eq!(hex::encode(&bytes[..]), "82a0");
}
