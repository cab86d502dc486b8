//! Unicode to coordinate lookups.
//!
//! Single scalars are looked up in a small set of disjoint, dense interval
//! tables; base-plus-combining-mark pairs go through a separate map.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::Coordinate;
use super::tables::{ENCODE_TABLES, MULTICHARS};
use crate::error::{ConvError, Result};

/// Dense encode table for scalars in `[low, high)`.
///
/// Each value is a packed coordinate (see [`Coordinate::from_packed`]);
/// zero marks a scalar inside the interval with no assignment.
pub(crate) struct EncodeTable {
    pub low: u32,
    pub high: u32,
    pub values: &'static [u16],
}

impl EncodeTable {
    fn get(&self, scalar: u32) -> Option<u16> {
        if scalar < self.low || scalar >= self.high {
            return None;
        }
        self.values.get((scalar - self.low) as usize).copied()
    }
}

static MULTICHAR_MAP: LazyLock<FxHashMap<(char, char), Coordinate>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.reserve(MULTICHARS.len());
    for &(base, mark, packed) in MULTICHARS.iter() {
        if let Some(coord) = Coordinate::from_packed(packed) {
            map.insert((base, mark), coord);
        }
    }
    log::trace!("built multi-codepoint map with {} entries", map.len());
    map
});

fn not_encodable(text: impl Into<String>) -> ConvError {
    ConvError::NotEncodable(text.into())
}

/// Look up the coordinate of a single scalar.
///
/// Printable ASCII (`0x20..0x7F`) is never mapped; callers pass it through
/// unchanged.
///
/// # Errors
///
/// `ConvError::NotEncodable` if the scalar has no JIS X 0213 coordinate.
pub fn encode_char(ch: char) -> Result<Coordinate> {
    let scalar = u32::from(ch);
    if (0x20..0x7F).contains(&scalar) {
        return Err(not_encodable(ch));
    }
    ENCODE_TABLES
        .iter()
        .find_map(|table| table.get(scalar))
        .and_then(Coordinate::from_packed)
        .ok_or_else(|| not_encodable(ch))
}

fn encode_pair(base: char, mark: char) -> Result<Coordinate> {
    MULTICHAR_MAP
        .get(&(base, mark))
        .copied()
        .ok_or_else(|| not_encodable([base, mark].iter().collect::<String>()))
}

/// Look up the coordinate of `text`, which must be exactly one scalar or a
/// base scalar followed by a combining mark.
///
/// # Errors
///
/// `ConvError::InvalidInputLength` if `text` is not one or two scalars;
/// `ConvError::NotEncodable` if it has no coordinate.
pub fn to_coordinate(text: &str) -> Result<Coordinate> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(ch), None, _) => encode_char(ch),
        (Some(base), Some(mark), None) => encode_pair(base, mark),
        _ => Err(ConvError::InvalidInputLength(text.chars().count())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint_and_sized() {
        for (i, a) in ENCODE_TABLES.iter().enumerate() {
            assert_eq!(a.values.len() as u32, a.high - a.low);
            for b in &ENCODE_TABLES[i + 1..] {
                assert!(a.high <= b.low || b.high <= a.low);
                // sorted by decreasing length
                assert!(a.high - a.low >= b.high - b.low);
            }
        }
    }

    #[test]
    fn test_single_scalars() {
        let coord = to_coordinate("あ").unwrap();
        assert_eq!((coord.plane(), coord.row(), coord.cell()), (1, 4, 2));
        assert_eq!(to_coordinate("\u{3000}").unwrap().to_string(), "1-1-1");
        assert_eq!(to_coordinate("\u{3006}").unwrap().to_string(), "1-1-26");
        assert_eq!(to_coordinate("𠂉").unwrap().to_string(), "2-1-1");
    }

    #[test]
    fn test_ascii_is_not_encodable() {
        for ch in [' ', 'a', 'Z', '0', '~'] {
            assert!(matches!(encode_char(ch), Err(ConvError::NotEncodable(_))));
        }
    }

    #[test]
    fn test_gap_inside_interval_is_not_encodable() {
        // U+3097 lies between assigned hiragana and the combining marks
        assert!(matches!(encode_char('\u{3097}'), Err(ConvError::NotEncodable(_))));
    }

    #[test]
    fn test_outside_all_intervals_is_not_encodable() {
        assert!(matches!(encode_char('\u{10FFFF}'), Err(ConvError::NotEncodable(_))));
        assert!(matches!(encode_char('\u{0}'), Err(ConvError::NotEncodable(_))));
    }

    #[test]
    fn test_combining_pair() {
        assert_eq!(to_coordinate("\u{304B}\u{309A}").unwrap().to_string(), "1-4-87");
        assert!(matches!(
            to_coordinate("\u{3042}\u{309A}"),
            Err(ConvError::NotEncodable(s)) if s == "\u{3042}\u{309A}"
        ));
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(to_coordinate(""), Err(ConvError::InvalidInputLength(0))));
        assert!(matches!(to_coordinate("あいう"), Err(ConvError::InvalidInputLength(3))));
    }
}
