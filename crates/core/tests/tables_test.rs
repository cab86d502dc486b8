//! Whole-table properties of the generated JIS X 0213 tables.

use aozoraconv_core::{ConvError, Coordinate, is_jis0208, to_coordinate, to_unicode};

fn all_coordinates() -> impl Iterator<Item = Coordinate> {
    (1..=2u8).flat_map(|plane| {
        (1..=94u8).flat_map(move |row| {
            (1..=94u8).filter_map(move |cell| Coordinate::new(plane, row, cell).ok())
        })
    })
}

#[test]
fn test_assigned_count() {
    let assigned = all_coordinates()
        .filter(|coord| coord.to_unicode().is_some())
        .count();
    assert_eq!(assigned, 11233);
}

#[test]
fn test_round_trip_on_assigned_coordinates() {
    for coord in all_coordinates() {
        let Some(text) = coord.to_unicode() else {
            continue;
        };
        assert_eq!(
            to_coordinate(text).unwrap(),
            coord,
            "round trip failed for {coord} ({text:?})"
        );
    }
}

#[test]
fn test_to_unicode_agrees_with_coordinate_lookup() {
    for coord in all_coordinates() {
        match to_unicode(coord.plane(), coord.row(), coord.cell()) {
            Ok(text) => assert_eq!(Some(text), coord.to_unicode()),
            Err(ConvError::Unassigned(c)) => {
                assert_eq!(c, coord);
                assert_eq!(coord.to_unicode(), None);
            }
            Err(e) => panic!("unexpected error for {coord}: {e}"),
        }
    }
}

#[test]
fn test_decoded_sequences_are_one_or_two_scalars() {
    for coord in all_coordinates() {
        if let Some(text) = coord.to_unicode() {
            let n = text.chars().count();
            assert!(n == 1 || n == 2, "{coord} decodes to {n} scalars");
        }
    }
}

#[test]
fn test_jis0208_is_assigned_subset_of_plane_one() {
    for coord in all_coordinates() {
        if coord.is_jis0208() {
            assert_eq!(coord.plane(), 1);
            assert!(coord.to_unicode().is_some(), "{coord} is JIS X 0208 but unassigned");
        }
    }
}

#[test]
fn test_jis0208_total_byte_count() {
    let bytes: usize = (1..=94u8)
        .flat_map(|row| (1..=94u8).map(move |cell| (row, cell)))
        .filter(|&(row, cell)| is_jis0208(1, row, cell))
        .map(|(row, cell)| aozoraconv_core::kuten_to_sjis(row, cell).len())
        .sum();
    assert_eq!(bytes, 13758);
}

#[test]
fn test_boundary_rejection() {
    assert!(matches!(to_unicode(3, 1, 1), Err(ConvError::OutOfRange { .. })));
    assert!(matches!(to_unicode(1, 95, 1), Err(ConvError::OutOfRange { .. })));
    assert!(matches!(to_unicode(2, 2, 80), Err(ConvError::Unassigned(_))));
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(to_unicode(1, 4, 2).unwrap(), "あ");
    assert_eq!(to_unicode(1, 1, 3).unwrap(), "。");
    assert_eq!(to_unicode(1, 2, 1).unwrap(), "◆");
    assert_eq!(to_coordinate("あ").unwrap(), Coordinate::new(1, 4, 2).unwrap());
    assert!(matches!(to_coordinate("A"), Err(ConvError::NotEncodable(_))));
    assert_eq!(aozoraconv_core::kuten_to_sjis(1, 1), [0x81, 0x40]);
    assert_eq!(aozoraconv_core::kuten_to_sjis(4, 2), [0x82, 0xA0]);
}

#[test]
fn test_standard_characters_not_windows_variants() {
    // The table follows the standard; Aozora substitutions happen elsewhere.
    assert_eq!(to_unicode(1, 1, 29).unwrap(), "\u{2014}");
    assert_eq!(to_unicode(1, 1, 33).unwrap(), "\u{301C}");
    assert_eq!(to_unicode(1, 1, 79).unwrap(), "\u{00A5}");
    assert!(matches!(to_coordinate("\u{2015}"), Err(ConvError::NotEncodable(_))));
}
