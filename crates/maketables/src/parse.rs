//! Parser for the x0213.org code table line format.
//!
//! Each entry line looks like `3-2477\tU+304B+309A\t# comment`: a plane
//! field offset by 2, a row and cell as two-digit hex offset by 0x20, and
//! zero, one or two Unicode scalars.

use thiserror::Error;

const PLANE_OFFSET: u8 = 2;
const CODE_OFFSET: u8 = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// The coordinate exists but has no character.
    Unassigned,
    Single(char),
    /// A base character followed by a combining mark.
    Combining(char, char),
}

/// One parsed entry, with plane, row and cell already de-offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub plane: u8,
    pub row: u8,
    pub cell: u8,
    pub mapping: Mapping,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_no}: could not parse {text:?}: {reason}")]
pub struct ParseError {
    pub line_no: usize,
    pub text: String,
    pub reason: String,
}

/// Parse one line of the code table.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<Line>, ParseError> {
    let err = |reason: &str| ParseError {
        line_no,
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split('\t');
    let code = fields.next().unwrap_or_default();
    let (plane, row, cell) = parse_code(code).map_err(err)?;
    let mapping = match fields.next() {
        None => Mapping::Unassigned,
        Some(field) if field.is_empty() || field.starts_with('#') => Mapping::Unassigned,
        Some(field) => parse_mapping(field).map_err(err)?,
    };

    Ok(Some(Line {
        plane,
        row,
        cell,
        mapping,
    }))
}

fn parse_code(code: &str) -> Result<(u8, u8, u8), &'static str> {
    let (plane, rowcell) = code.split_once('-').ok_or("missing '-' in code field")?;
    let plane: u8 = plane.parse().map_err(|_| "invalid plane")?;
    if rowcell.len() != 4 || !rowcell.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("row and cell must be four hex digits");
    }
    let row = u8::from_str_radix(&rowcell[..2], 16).map_err(|_| "invalid row")?;
    let cell = u8::from_str_radix(&rowcell[2..], 16).map_err(|_| "invalid cell")?;

    let plane = plane
        .checked_sub(PLANE_OFFSET)
        .filter(|p| (1..=2).contains(p))
        .ok_or("plane out of range")?;
    let row = row
        .checked_sub(CODE_OFFSET)
        .filter(|r| (1..=94).contains(r))
        .ok_or("row out of range")?;
    let cell = cell
        .checked_sub(CODE_OFFSET)
        .filter(|c| (1..=94).contains(c))
        .ok_or("cell out of range")?;
    Ok((plane, row, cell))
}

fn parse_mapping(field: &str) -> Result<Mapping, &'static str> {
    let scalars = field.strip_prefix("U+").ok_or("mapping must start with U+")?;
    match scalars.split_once('+') {
        None => Ok(Mapping::Single(parse_scalar(scalars)?)),
        Some((base, mark)) => {
            let mark = mark.strip_prefix("U+").unwrap_or(mark);
            Ok(Mapping::Combining(parse_scalar(base)?, parse_scalar(mark)?))
        }
    }
}

fn parse_scalar(hex: &str) -> Result<char, &'static str> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("invalid hex scalar");
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or("not a unicode scalar value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scalar() {
        let line = parse_line(1, "3-2121\tU+3000\t# IDEOGRAPHIC SPACE").unwrap();
        assert_eq!(
            line,
            Some(Line {
                plane: 1,
                row: 1,
                cell: 1,
                mapping: Mapping::Single('\u{3000}'),
            })
        );
    }

    #[test]
    fn test_combining_pair() {
        let line = parse_line(1, "3-2477\tU+304B+309A\t# \t[2000]").unwrap().unwrap();
        assert_eq!((line.plane, line.row, line.cell), (1, 4, 87));
        assert_eq!(line.mapping, Mapping::Combining('\u{304B}', '\u{309A}'));

        let line = parse_line(1, "3-2477\tU+304B+U+309A").unwrap().unwrap();
        assert_eq!(line.mapping, Mapping::Combining('\u{304B}', '\u{309A}'));
    }

    #[test]
    fn test_unassigned() {
        let line = parse_line(1, "4-2E7E\t\t# <reserved>").unwrap().unwrap();
        assert_eq!((line.plane, line.row, line.cell), (2, 14, 94));
        assert_eq!(line.mapping, Mapping::Unassigned);
        assert_eq!(parse_line(1, "3-2E21").unwrap().unwrap().mapping, Mapping::Unassigned);
    }

    #[test]
    fn test_plane_two_supplementary() {
        let line = parse_line(1, "4-2121\tU+20089\t# <cjk>").unwrap().unwrap();
        assert_eq!((line.plane, line.row, line.cell), (2, 1, 1));
        assert_eq!(line.mapping, Mapping::Single('\u{20089}'));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   ").unwrap(), None);
        assert_eq!(parse_line(1, "## Date: 2004").unwrap(), None);
    }

    #[test]
    fn test_malformed_lines_name_the_line() {
        let cases = [
            "3_2121\tU+3000",
            "3-21\tU+3000",
            "3-2G21\tU+3000",
            "5-2121\tU+3000",
            "3-2021\tU+3000",
            "3-217F\tU+3000",
            "3-2121\t3000",
            "3-2121\tU+",
            "3-2121\tU+D800",
            "3-2121\tU+304B+",
        ];
        for (i, text) in cases.iter().enumerate() {
            let err = parse_line(i + 10, text).unwrap_err();
            assert_eq!(err.line_no, i + 10);
            assert_eq!(err.text, *text);
            assert!(err.to_string().starts_with(&format!("line {}:", i + 10)));
        }
    }
}
