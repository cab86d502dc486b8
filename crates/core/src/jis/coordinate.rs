//! Plane-row-cell ("men-ku-ten") coordinates of JIS X 0213.

use std::fmt;

use crate::error::{ConvError, Result};

/// Number of rows per plane, and of cells per row.
pub const CELLS: u8 = 94;

const CODE_MASK: u16 = 0x7f;
const CODE_SHIFT: u16 = 7;
const PLANE_SHIFT: u16 = 14;

/// A valid JIS X 0213 coordinate.
///
/// Plane 1 is the JIS X 0213:2004 plane 1 character set, plane 2 the
/// JIS X 0213:2000 plane 2 extension. Rows and cells are 1-based.
/// All three fields are validated together on construction; there is no
/// partially valid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    plane: u8,
    row: u8,
    cell: u8,
}

impl Coordinate {
    /// Build a coordinate, rejecting fields outside `1..=2` / `1..=94`.
    pub fn new(plane: u8, row: u8, cell: u8) -> Result<Self> {
        Self::checked(plane, row, cell).ok_or(ConvError::OutOfRange { plane, row, cell })
    }

    const fn checked(plane: u8, row: u8, cell: u8) -> Option<Self> {
        if plane < 1 || plane > 2 || row < 1 || row > CELLS || cell < 1 || cell > CELLS {
            return None;
        }
        Some(Self { plane, row, cell })
    }

    /// Unpack a table value laid out as `plane << 14 | row << 7 | cell`.
    ///
    /// Zero plane bits mark an unmapped slot and yield `None`, as does any
    /// field outside its valid range.
    pub const fn from_packed(value: u16) -> Option<Self> {
        let plane = (value >> PLANE_SHIFT) as u8;
        let row = ((value >> CODE_SHIFT) & CODE_MASK) as u8;
        let cell = (value & CODE_MASK) as u8;
        Self::checked(plane, row, cell)
    }

    /// Pack into the 16-bit table layout.
    pub const fn packed(self) -> u16 {
        (self.plane as u16) << PLANE_SHIFT | (self.row as u16) << CODE_SHIFT | self.cell as u16
    }

    pub const fn plane(self) -> u8 {
        self.plane
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn cell(self) -> u8 {
        self.cell
    }

    /// Whether this coordinate is an assigned JIS X 0208 position.
    pub fn is_jis0208(self) -> bool {
        super::is_jis0208(self.plane, self.row, self.cell)
    }

    /// The one or two scalars assigned here, if any.
    pub fn to_unicode(self) -> Option<&'static str> {
        super::decode::lookup(self)
    }

    /// Shift_JIS byte pair for this coordinate.
    ///
    /// Only plane 1 has a Shift_JIS projection; plane 2 yields `None`.
    pub fn to_sjis(self) -> Option<[u8; 2]> {
        if self.plane != 1 {
            return None;
        }
        Some(crate::sjis::kuten_to_sjis(self.row, self.cell))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.plane, self.row, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coordinate::new(1, 1, 1).is_ok());
        assert!(Coordinate::new(2, 94, 94).is_ok());
        for (p, r, c) in [(0, 1, 1), (3, 1, 1), (1, 0, 1), (1, 95, 1), (1, 1, 0), (1, 1, 95)] {
            assert!(matches!(
                Coordinate::new(p, r, c),
                Err(ConvError::OutOfRange { plane, row, cell }) if (plane, row, cell) == (p, r, c)
            ));
        }
    }

    #[test]
    fn test_packing() {
        let coord = Coordinate::new(1, 4, 2).unwrap();
        assert_eq!(coord.packed(), 1 << 14 | 4 << 7 | 2);
        assert_eq!(Coordinate::from_packed(coord.packed()), Some(coord));

        let coord = Coordinate::new(2, 94, 94).unwrap();
        assert_eq!(Coordinate::from_packed(coord.packed()), Some(coord));
    }

    #[test]
    fn test_zero_plane_bits_are_unmapped() {
        assert_eq!(Coordinate::from_packed(0), None);
        assert_eq!(Coordinate::from_packed(4 << 7 | 2), None);
        // plane class 3 is never produced by the generator
        assert_eq!(Coordinate::from_packed(3 << 14 | 4 << 7 | 2), None);
        assert_eq!(Coordinate::from_packed(1 << 14 | 95 << 7 | 2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1, 85, 54).unwrap().to_string(), "1-85-54");
    }

    #[test]
    fn test_to_sjis_plane_one_only() {
        assert_eq!(Coordinate::new(1, 4, 2).unwrap().to_sjis(), Some([0x82, 0xA0]));
        assert_eq!(Coordinate::new(2, 1, 1).unwrap().to_sjis(), None);
    }
}
