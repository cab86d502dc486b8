//! Error types for the aozoraconv conversion library.

use thiserror::Error;

use crate::jis::Coordinate;

/// Primary error type for coordinate lookups and document conversion.
#[derive(Error, Debug)]
pub enum ConvError {
    /// An encode query received neither one nor two scalars.
    #[error("expected 1 or 2 unicode scalars, got {0}")]
    InvalidInputLength(usize),

    /// The text has no JIS X 0213 coordinate.
    #[error("not encodable in JIS X 0213: {0:?}")]
    NotEncodable(String),

    #[error("coordinate out of range: plane {plane}, row {row}, cell {cell}")]
    OutOfRange { plane: u8, row: u8, cell: u8 },

    /// The coordinate is valid but no character is assigned to it.
    #[error("unassigned coordinate {0}")]
    Unassigned(Coordinate),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by a legacy byte codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// `len` bytes starting at byte offset `position` have no character mapping.
    #[error("malformed byte sequence of length {len} at byte {position}")]
    Malformed { position: usize, len: usize },

    /// The scalar at index `position` (counted in chars) has no byte representation.
    #[error("unmappable character {character:?} at position {position}")]
    Unmappable { position: usize, character: char },
}

/// Convenience Result type alias for ConvError.
pub type Result<T> = std::result::Result<T, ConvError>;
