//! JIS X 0213 coordinate model and lookup tables.
//!
//! This module contains:
//! - `coordinate`: the plane-row-cell value type and its 16-bit packing
//! - `jis0208`: the JIS X 0208 subset predicate
//! - `decode`: coordinate to Unicode lookups
//! - `encode`: Unicode to coordinate lookups
//!
//! The tables themselves are generated by `aozoraconv-maketables` from
//! `data/jisx0213-2004-std.txt`.

pub mod coordinate;
pub mod decode;
pub mod encode;
pub mod jis0208;

#[rustfmt::skip]
mod tables;

pub use coordinate::Coordinate;
pub use decode::to_unicode;
pub use encode::{encode_char, to_coordinate};
pub use jis0208::is_jis0208;
