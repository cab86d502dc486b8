//! Whole-document conversion between UTF-8 text and Aozora Bunko Shift_JIS.

use std::io::{Read, Write};

use crate::aozora::{normalize_backward, normalize_forward};
use crate::codec::{LegacyCodec, ShiftJis};
use crate::error::Result;

/// Aozora Bunko converter over a legacy byte codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aozora<C = ShiftJis> {
    codec: C,
}

impl<C: LegacyCodec> Aozora<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Decode legacy bytes, then restore standard characters.
    ///
    /// # Errors
    ///
    /// `ConvError::Codec` with the byte offset of the first undecodable sequence.
    pub fn decode_document(&self, bytes: &[u8]) -> Result<String> {
        let text = self.codec.decode(bytes)?;
        Ok(normalize_backward(&text).into_owned())
    }

    /// Apply the Aozora substitutions, then encode to legacy bytes.
    ///
    /// # Errors
    ///
    /// `ConvError::Codec` carrying the offending scalar and its index (in
    /// chars) within `text`.
    pub fn encode_document(&self, text: &str) -> Result<Vec<u8>> {
        let normalized = normalize_forward(text);
        Ok(self.codec.encode(&normalized)?)
    }

    /// Read all of `input` as legacy bytes and write it to `output` as UTF-8.
    pub fn decode<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        let text = self.decode_document(&bytes)?;
        output.write_all(text.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    /// Read all of `input` as UTF-8 and write it to `output` as legacy bytes.
    pub fn encode<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let bytes = self.encode_document(&text)?;
        output.write_all(&bytes)?;
        output.flush()?;
        Ok(())
    }
}

/// Decode Aozora Bunko Shift_JIS bytes to UTF-8 text.
pub fn decode_document(bytes: &[u8]) -> Result<String> {
    Aozora::<ShiftJis>::default().decode_document(bytes)
}

/// Encode UTF-8 text to Aozora Bunko Shift_JIS bytes.
pub fn encode_document(text: &str) -> Result<Vec<u8>> {
    Aozora::<ShiftJis>::default().encode_document(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, ConvError};
    use std::cell::RefCell;

    /// Records what it was handed and echoes UTF-8.
    #[derive(Default)]
    struct EchoCodec {
        seen: RefCell<Vec<String>>,
    }

    impl LegacyCodec for EchoCodec {
        fn decode(&self, bytes: &[u8]) -> std::result::Result<String, CodecError> {
            String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::Malformed {
                position: e.utf8_error().valid_up_to(),
                len: 1,
            })
        }

        fn encode(&self, text: &str) -> std::result::Result<Vec<u8>, CodecError> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(text.as_bytes().to_vec())
        }
    }

    #[test]
    fn test_encode_normalizes_before_codec() {
        let conv = Aozora::new(EchoCodec::default());
        conv.encode_document("\u{301C}\u{2014}").unwrap();
        assert_eq!(conv.codec.seen.borrow().as_slice(), ["\u{FF5E}\u{2015}"]);
    }

    #[test]
    fn test_decode_normalizes_after_codec() {
        let conv = Aozora::new(EchoCodec::default());
        let text = conv.decode_document("\u{FF5E}\u{FFE0}".as_bytes()).unwrap();
        assert_eq!(text, "\u{301C}\u{00A2}");
    }

    #[test]
    fn test_codec_error_is_surfaced() {
        let err = encode_document("abc\u{20089}").unwrap_err();
        assert!(matches!(
            err,
            ConvError::Codec(CodecError::Unmappable { position: 3, character: '\u{20089}' })
        ));
    }

    #[test]
    fn test_stream_round_trip() {
        let mut sjis = Vec::new();
        Aozora::<ShiftJis>::default()
            .encode("\u{301C}青空文庫\u{00A2}\n".as_bytes(), &mut sjis)
            .unwrap();
        let mut utf8 = Vec::new();
        Aozora::<ShiftJis>::default()
            .decode(sjis.as_slice(), &mut utf8)
            .unwrap();
        assert_eq!(String::from_utf8(utf8).unwrap(), "\u{301C}青空文庫\u{00A2}\n");
    }
}
