//! In-memory form of the JIS X 0213 tables, built from parsed lines.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::parse::{Line, Mapping, ParseError, parse_line};

const CELLS: usize = 94;
const PLANE_SIZE: usize = CELLS * CELLS;

/// Any run of at least this many unmapped scalars splits the encode tables.
pub const DEFAULT_SEPARATION: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coord {
    pub plane: u8,
    pub row: u8,
    pub cell: u8,
}

impl Coord {
    /// `plane << 14 | row << 7 | cell`
    pub fn packed(self) -> u16 {
        u16::from(self.plane) << 14 | u16::from(self.row) << 7 | u16::from(self.cell)
    }

    fn index(self) -> usize {
        usize::from(self.plane - 1) * PLANE_SIZE
            + usize::from(self.row - 1) * CELLS
            + usize::from(self.cell - 1)
    }
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("U+{scalar:04X} is assigned to both {first:?} and {second:?}")]
    Duplicate {
        scalar: u32,
        first: Coord,
        second: Coord,
    },
}

/// Half-open scalar interval `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub low: u32,
    pub high: u32,
}

impl Interval {
    pub fn len(&self) -> usize {
        (self.high - self.low) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.high == self.low
    }
}

#[derive(Debug)]
pub struct Tables {
    decode: Vec<Option<String>>,
    reverse: BTreeMap<u32, Coord>,
    multichars: BTreeMap<(char, char), Coord>,
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

impl Tables {
    pub fn new() -> Self {
        Self {
            decode: vec![None; 2 * PLANE_SIZE],
            reverse: BTreeMap::new(),
            multichars: BTreeMap::new(),
        }
    }

    /// Parse a whole code table file.
    pub fn from_source(source: &str) -> Result<Self, TableError> {
        let mut tables = Self::new();
        for (i, text) in source.lines().enumerate() {
            if let Some(line) = parse_line(i + 1, text)? {
                tables.insert(line)?;
            }
        }
        log::debug!(
            "parsed {} single and {} combining assignments",
            tables.reverse.len(),
            tables.multichars.len()
        );
        Ok(tables)
    }

    /// Record one line. Unassigned lines populate nothing.
    pub fn insert(&mut self, line: Line) -> Result<(), TableError> {
        let coord = Coord {
            plane: line.plane,
            row: line.row,
            cell: line.cell,
        };
        match line.mapping {
            Mapping::Unassigned => {}
            Mapping::Single(ch) => {
                let scalar = u32::from(ch);
                if let Some(&first) = self.reverse.get(&scalar) {
                    return Err(TableError::Duplicate {
                        scalar,
                        first,
                        second: coord,
                    });
                }
                self.reverse.insert(scalar, coord);
                self.decode[coord.index()] = Some(ch.to_string());
            }
            Mapping::Combining(base, mark) => {
                self.multichars.insert((base, mark), coord);
                self.decode[coord.index()] = Some([base, mark].iter().collect());
            }
        }
        Ok(())
    }

    pub fn decode(&self, coord: Coord) -> Option<&str> {
        self.decode[coord.index()].as_deref()
    }

    pub fn encode(&self, scalar: u32) -> Option<Coord> {
        self.reverse.get(&scalar).copied()
    }

    pub fn multichars(&self) -> impl Iterator<Item = (&(char, char), &Coord)> {
        self.multichars.iter()
    }

    /// Split the mapped scalars into disjoint intervals, sorted by
    /// decreasing length.
    ///
    /// A new interval starts whenever at least `separation` unmapped
    /// scalars follow the previous mapped one.
    pub fn intervals(&self, separation: u32) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = Vec::new();
        let mut current: Option<Interval> = None;
        for &scalar in self.reverse.keys() {
            current = match current {
                Some(iv) if scalar - iv.high >= separation => {
                    intervals.push(iv);
                    Some(Interval {
                        low: scalar,
                        high: scalar + 1,
                    })
                }
                Some(iv) => Some(Interval {
                    low: iv.low,
                    high: scalar + 1,
                }),
                None => Some(Interval {
                    low: scalar,
                    high: scalar + 1,
                }),
            };
        }
        intervals.extend(current);
        intervals.sort_by(|a, b| b.len().cmp(&a.len()));
        intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## sample
3-2121\tU+3000\t# IDEOGRAPHIC SPACE
3-2122\tU+3001\t# IDEOGRAPHIC COMMA
3-2477\tU+304B+309A\t# \t[2000]
3-2E21\t\t# <reserved>
4-2121\tU+20089\t# <cjk>
";

    #[test]
    fn test_from_source() {
        let tables = Tables::from_source(SAMPLE).unwrap();
        let coord = |plane, row, cell| Coord { plane, row, cell };
        assert_eq!(tables.decode(coord(1, 1, 1)), Some("\u{3000}"));
        assert_eq!(tables.decode(coord(1, 4, 87)), Some("\u{304B}\u{309A}"));
        assert_eq!(tables.decode(coord(1, 14, 1)), None);
        assert_eq!(tables.decode(coord(2, 1, 1)), Some("\u{20089}"));
        assert_eq!(tables.encode(0x3001), Some(coord(1, 1, 2)));
        // combining sequences never enter the single-scalar map
        assert_eq!(tables.encode(0x304B), None);
        assert_eq!(tables.multichars().count(), 1);
    }

    #[test]
    fn test_duplicate_scalar() {
        let source = "3-2121\tU+3000\n3-2122\tU+3000\n";
        assert!(matches!(
            Tables::from_source(source),
            Err(TableError::Duplicate { scalar: 0x3000, .. })
        ));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = Tables::from_source("3-2121\tU+3000\nbogus\n").unwrap_err();
        assert!(matches!(err, TableError::Parse(ParseError { line_no: 2, .. })));
    }

    #[test]
    fn test_intervals() {
        let tables = Tables::from_source(SAMPLE).unwrap();
        assert_eq!(
            tables.intervals(DEFAULT_SEPARATION),
            vec![
                Interval {
                    low: 0x3000,
                    high: 0x3002
                },
                Interval {
                    low: 0x20089,
                    high: 0x2008A
                },
            ]
        );
        assert_eq!(
            tables.intervals(0x1D089),
            vec![Interval {
                low: 0x3000,
                high: 0x2008A
            }]
        );
    }

    #[test]
    fn test_packed() {
        let coord = Coord {
            plane: 2,
            row: 94,
            cell: 1,
        };
        assert_eq!(coord.packed(), 0x8000 | 94 << 7 | 1);
    }
}
