//! aozoraconv - JIS X 0213 coordinate tables and Aozora Bunko text conversion.
//!
//! The crate maps Unicode to and from JIS X 0213 plane-row-cell coordinates,
//! tests membership in the JIS X 0208 subset, projects coordinates onto
//! Shift_JIS byte pairs, and converts whole documents between UTF-8 and the
//! Shift_JIS flavour used by Aozora Bunko.

pub mod aozora;
pub mod codec;
pub mod convert;
pub mod error;
pub mod jis;
pub mod sjis;

pub use aozora::{normalize_backward, normalize_forward};
pub use codec::{LegacyCodec, ShiftJis};
pub use convert::{Aozora, decode_document, encode_document};
pub use error::{CodecError, ConvError, Result};
pub use jis::{Coordinate, encode_char, is_jis0208, to_coordinate, to_unicode};
pub use sjis::kuten_to_sjis;
