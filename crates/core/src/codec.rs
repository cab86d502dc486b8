//! Byte-level codecs for the legacy Shift_JIS family.

use encoding_rs::{DecoderResult, EncoderResult, SHIFT_JIS};

use crate::error::CodecError;

/// Whole-buffer transcoding between a legacy byte encoding and Unicode.
pub trait LegacyCodec {
    /// Decode `bytes`, failing at the first sequence with no mapping.
    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError>;

    /// Encode `text`, failing at the first scalar with no byte representation.
    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError>;
}

/// Shift_JIS as specified by the WHATWG Encoding Standard (code page 932).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftJis;

impl LegacyCodec for ShiftJis {
    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len());
        let mut out = String::with_capacity(capacity);
        let mut read_total = 0;
        loop {
            let (result, read) =
                decoder.decode_to_string_without_replacement(&bytes[read_total..], &mut out, true);
            read_total += read;
            match result {
                DecoderResult::InputEmpty => return Ok(out),
                DecoderResult::OutputFull => {
                    let remaining = bytes.len() - read_total;
                    out.reserve(
                        decoder
                            .max_utf8_buffer_length_without_replacement(remaining)
                            .unwrap_or(remaining)
                            .max(4),
                    );
                }
                DecoderResult::Malformed(bad, extra) => {
                    let len = usize::from(bad);
                    let position = read_total - usize::from(extra) - len;
                    log::debug!("malformed Shift_JIS sequence at byte {position} (len {len})");
                    return Err(CodecError::Malformed { position, len });
                }
            }
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let mut encoder = SHIFT_JIS.new_encoder();
        let capacity = encoder
            .max_buffer_length_from_utf8_without_replacement(text.len())
            .unwrap_or(text.len());
        let mut out = Vec::with_capacity(capacity);
        let mut read_total = 0;
        loop {
            let (result, read) =
                encoder.encode_from_utf8_to_vec_without_replacement(&text[read_total..], &mut out, true);
            read_total += read;
            match result {
                EncoderResult::InputEmpty => return Ok(out),
                EncoderResult::OutputFull => {
                    let remaining = text.len() - read_total;
                    out.reserve(
                        encoder
                            .max_buffer_length_from_utf8_without_replacement(remaining)
                            .unwrap_or(remaining)
                            .max(2),
                    );
                }
                EncoderResult::Unmappable(character) => {
                    let offset = read_total - character.len_utf8();
                    let position = text[..offset].chars().count();
                    log::debug!("unmappable {character:?} at position {position}");
                    return Err(CodecError::Unmappable { position, character });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_windows_variants() {
        let bytes = ShiftJis.encode("\u{FF5E}∥￠\u{2015}").unwrap();
        assert_eq!(bytes, [0x81, 0x60, 0x81, 0x61, 0x81, 0x91, 0x81, 0x5C]);
    }

    #[test]
    fn test_encode_reports_unmappable() {
        let err = ShiftJis.encode("\u{FF5E}∥￠\u{2015} \u{2014}123").unwrap_err();
        assert_eq!(
            err,
            CodecError::Unmappable {
                position: 5,
                character: '\u{2014}'
            }
        );
    }

    #[test]
    fn test_decode_reports_malformed() {
        // 0x82 0xA0 is あ; 0x85 0x40 is an unassigned row
        let err = ShiftJis.decode(&[0x82, 0xA0, 0x41, 0x85, 0x40]).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { position: 3, .. }));
    }

    #[test]
    fn test_decode_truncated_lead_byte() {
        let err = ShiftJis.decode(&[0x41, 0x82]).unwrap_err();
        assert_eq!(err, CodecError::Malformed { position: 1, len: 1 });
    }

    #[test]
    fn test_round_trip_ascii_and_kana() {
        let text = "Aozora あいうえお ｱｲｳ";
        assert_eq!(ShiftJis.decode(&ShiftJis.encode(text).unwrap()).unwrap(), text);
    }
}
