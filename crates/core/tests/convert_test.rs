//! Document conversion between UTF-8 and Aozora Bunko Shift_JIS.

use aozoraconv_core::{
    Aozora, CodecError, ConvError, LegacyCodec, ShiftJis, decode_document, encode_document,
};

fn sjis(text: &str) -> Vec<u8> {
    ShiftJis.encode(text).unwrap()
}

#[test]
fn test_encode_document() {
    let cases = [
        ("あいうえお", sjis("あいうえお")),
        ("\u{301C}", sjis("\u{FF5E}")),
        ("\u{FF5E}", sjis("\u{FF5E}")),
        ("\u{00A2}", sjis("\u{FFE0}")),
        ("\u{2014}", sjis("\u{2015}")),
    ];
    for (input, expected) in cases {
        assert_eq!(encode_document(input).unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn test_decode_document() {
    let cases = [
        ("あいうえお", sjis("あいうえお")),
        ("\u{301C}", sjis("\u{FF5E}")),
        ("\u{00A2}", sjis("\u{FFE0}")),
        ("\u{2016}", sjis("\u{2225}")),
    ];
    for (expected, input) in cases {
        assert_eq!(decode_document(&input).unwrap(), expected);
    }
}

#[test]
fn test_windows_variants_bytes() {
    let bytes = encode_document("\u{FF5E}∥￠\u{2015}").unwrap();
    assert_eq!(hex::encode(bytes), "816081618191815c");
}

#[test]
fn test_em_dash_is_substituted_before_encoding() {
    // U+2014 alone has no Shift_JIS mapping; the Aozora convention writes U+2015.
    assert!(ShiftJis.encode("\u{2014}").is_err());
    let bytes = encode_document("\u{FF5E}∥￠\u{2015} \u{2014}123").unwrap();
    assert_eq!(hex::encode(bytes), "816081618191815c20815c313233");
}

#[test]
fn test_unmappable_position_counts_original_scalars() {
    // ¢ is substituted by a wider UTF-8 scalar; the index must still refer to the input.
    let err = encode_document("¢¢\u{9DD7}x").unwrap_err();
    match err {
        ConvError::Codec(CodecError::Unmappable {
            position,
            character,
        }) => {
            assert_eq!(position, 2);
            assert_eq!(character, '\u{9DD7}');
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_position() {
    let mut bytes = sjis("青空");
    bytes.push(0xFF);
    let err = decode_document(&bytes).unwrap_err();
    assert!(matches!(
        err,
        ConvError::Codec(CodecError::Malformed { position: 4, .. })
    ));
}

#[test]
fn test_document_round_trip() {
    let text = "吾輩は猫である。名前はまだ無い。\n〜‖−¢£¥¬—\nASCII 123\n";
    let bytes = encode_document(text).unwrap();
    assert_eq!(decode_document(&bytes).unwrap(), text);
}

#[test]
fn test_stream_conversion() {
    let converter = Aozora::new(ShiftJis);
    let mut bytes = Vec::new();
    converter.encode("〜ですか\n".as_bytes(), &mut bytes).unwrap();
    assert_eq!(bytes, sjis("～ですか\n"));

    let mut text = Vec::new();
    converter.decode(bytes.as_slice(), &mut text).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), "〜ですか\n");
}

#[test]
fn test_stream_rejects_invalid_utf8() {
    let converter = Aozora::new(ShiftJis);
    let err = converter
        .encode(&[0xFFu8, 0xFE][..], Vec::new())
        .unwrap_err();
    assert!(matches!(err, ConvError::Io(_)));
}
