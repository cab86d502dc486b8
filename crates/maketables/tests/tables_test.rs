use std::fs;
use std::path::PathBuf;

use aozoraconv_maketables::{DEFAULT_SEPARATION, Tables, render};

fn workspace_file(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(rel)
}

fn load_tables() -> Tables {
    let source = fs::read_to_string(workspace_file("data/jisx0213-2004-std.txt")).unwrap();
    Tables::from_source(&source).unwrap()
}

#[test]
fn test_checked_in_tables_are_fresh() {
    let generated = render(&load_tables(), DEFAULT_SEPARATION).unwrap();
    let checked_in = fs::read_to_string(workspace_file("crates/core/src/jis/tables.rs")).unwrap();
    assert!(
        generated == checked_in,
        "crates/core/src/jis/tables.rs is stale; rerun maketables"
    );
}

#[test]
fn test_data_file_shape() {
    let tables = load_tables();
    assert_eq!(tables.multichars().count(), 25);

    let intervals = tables.intervals(DEFAULT_SEPARATION);
    assert_eq!(intervals.len(), 5);
    assert_eq!((intervals[0].low, intervals[0].high), (0x2000b, 0x2a6b3));
    assert_eq!((intervals[4].low, intervals[4].high), (0xa0, 0x452));
}
