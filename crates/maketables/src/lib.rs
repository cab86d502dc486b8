//! Offline generator for the JIS X 0213 lookup tables of `aozoraconv-core`.
//!
//! Reads the x0213.org code table and emits the Rust module with the dense
//! decode table, the interval-compressed encode tables and the
//! combining-sequence map.

pub mod parse;
pub mod render;
pub mod tables;

pub use parse::{Line, Mapping, ParseError, parse_line};
pub use render::render;
pub use tables::{DEFAULT_SEPARATION, Interval, TableError, Tables};
