//! Coordinate to Unicode lookups.

use super::Coordinate;
use super::tables::JIS0213_DECODE;
use crate::error::{ConvError, Result};

pub(crate) fn lookup(coord: Coordinate) -> Option<&'static str> {
    let plane = usize::from(coord.plane() - 1);
    let row = usize::from(coord.row() - 1);
    let cell = usize::from(coord.cell() - 1);
    JIS0213_DECODE[plane][row][cell]
}

/// Return the one or two scalars assigned to `plane-row-cell`.
///
/// The table value is returned verbatim, with no Aozora substitution.
///
/// # Errors
///
/// `ConvError::OutOfRange` when plane is not 1 or 2, or row/cell is outside
/// `1..=94`; `ConvError::Unassigned` when the coordinate is valid but empty.
pub fn to_unicode(plane: u8, row: u8, cell: u8) -> Result<&'static str> {
    let coord = Coordinate::new(plane, row, cell)?;
    lookup(coord).ok_or(ConvError::Unassigned(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_assignments() {
        assert_eq!(to_unicode(1, 1, 1).unwrap(), "\u{3000}");
        assert_eq!(to_unicode(1, 1, 3).unwrap(), "。");
        assert_eq!(to_unicode(1, 2, 1).unwrap(), "◆");
        assert_eq!(to_unicode(1, 4, 2).unwrap(), "あ");
        assert_eq!(to_unicode(1, 5, 2).unwrap(), "ア");
        assert_eq!(to_unicode(1, 21, 21).unwrap(), "亀");
        assert_eq!(to_unicode(2, 1, 1).unwrap(), "𠂉");
    }

    #[test]
    fn test_combining_sequence() {
        assert_eq!(to_unicode(1, 4, 87).unwrap(), "\u{304B}\u{309A}");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(to_unicode(3, 1, 1), Err(ConvError::OutOfRange { .. })));
        assert!(matches!(to_unicode(1, 95, 1), Err(ConvError::OutOfRange { .. })));
        assert!(matches!(to_unicode(0, 1, 1), Err(ConvError::OutOfRange { .. })));
        assert!(matches!(to_unicode(1, 1, 0), Err(ConvError::OutOfRange { .. })));
    }

    #[test]
    fn test_unassigned() {
        // plane 2 row 2 has no assignments
        assert!(matches!(
            to_unicode(2, 2, 80),
            Err(ConvError::Unassigned(c)) if c.to_string() == "2-2-80"
        ));
        assert!(matches!(to_unicode(1, 4, 92), Err(ConvError::Unassigned(_))));
    }
}
