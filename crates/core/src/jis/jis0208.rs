//! Membership test for the JIS X 0208 subset of JIS X 0213 plane 1.

/// Assigned cells of each JIS X 0208 row, as closed `(first, last)` ranges.
///
/// Rows 9-15 and 85-94 have no JIS X 0208 assignments.
const JIS0208_CELLS: [&[(u8, u8)]; 94] = {
    const NONE: &[(u8, u8)] = &[];
    const FULL: &[(u8, u8)] = &[(1, 94)];
    let mut rows: [&[(u8, u8)]; 94] = [NONE; 94];
    rows[0] = FULL;
    rows[1] = &[(1, 14), (26, 33), (42, 48), (60, 74), (82, 89), (94, 94)];
    rows[2] = &[(16, 25), (33, 58), (65, 90)];
    rows[3] = &[(1, 83)];
    rows[4] = &[(1, 86)];
    rows[5] = &[(1, 24), (33, 56)];
    rows[6] = &[(1, 33), (49, 81)];
    rows[7] = &[(1, 32)];
    let mut row = 16;
    while row <= 83 {
        rows[row - 1] = FULL;
        row += 1;
    }
    rows[46] = &[(1, 51)];
    rows[83] = &[(1, 6)];
    rows
};

/// Whether `plane-row-cell` is an assigned JIS X 0208 coordinate.
///
/// Total over all inputs: plane 2, and any row or cell outside `1..=94`
/// (including zero), is simply `false`.
pub fn is_jis0208(plane: u8, row: u8, cell: u8) -> bool {
    if plane != 1 || !(1..=94).contains(&row) {
        return false;
    }
    JIS0208_CELLS[usize::from(row - 1)]
        .iter()
        .any(|&(first, last)| (first..=last).contains(&cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_boundaries() {
        assert!(is_jis0208(1, 1, 1));
        assert!(is_jis0208(1, 1, 94));
        assert!(is_jis0208(1, 2, 14));
        assert!(!is_jis0208(1, 2, 15));
        assert!(!is_jis0208(1, 2, 25));
        assert!(is_jis0208(1, 2, 26));
        assert!(is_jis0208(1, 2, 94));
        assert!(!is_jis0208(1, 4, 84));
        assert!(!is_jis0208(1, 9, 1));
        assert!(!is_jis0208(1, 15, 94));
        assert!(is_jis0208(1, 16, 1));
        assert!(is_jis0208(1, 47, 51));
        assert!(!is_jis0208(1, 47, 52));
        assert!(is_jis0208(1, 48, 1));
        assert!(is_jis0208(1, 84, 6));
        assert!(!is_jis0208(1, 84, 7));
        assert!(!is_jis0208(1, 85, 1));
    }

    #[test]
    fn test_invalid_fields_are_not_members() {
        assert!(!is_jis0208(0, 1, 1));
        assert!(!is_jis0208(1, 0, 1));
        assert!(!is_jis0208(1, 1, 0));
        assert!(!is_jis0208(1, 95, 1));
        assert!(!is_jis0208(1, 1, 95));
        assert!(!is_jis0208(u8::MAX, u8::MAX, u8::MAX));
    }

    #[test]
    fn test_plane_two_never_member() {
        for row in 1..=94 {
            for cell in 1..=94 {
                assert!(!is_jis0208(2, row, cell));
            }
        }
    }

    #[test]
    fn test_member_count() {
        let count = (1..=94u8)
            .flat_map(|row| (1..=94u8).map(move |cell| (row, cell)))
            .filter(|&(row, cell)| is_jis0208(1, row, cell))
            .count();
        assert_eq!(count, 6879);
    }
}
