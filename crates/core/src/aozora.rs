//! Aozora Bunko character substitutions.
//!
//! Aozora Bunko texts are Shift_JIS (Windows code page 932 flavour), so a few
//! JIS X 0213 characters are written with their compatibility counterparts.
//! `normalize_forward` rewrites text into that convention before encoding and
//! `normalize_backward` restores the standard characters after decoding.

use std::borrow::Cow;

/// `(standard, aozora)` pairs.
pub const AOZORA_CHAR_MAP: [(char, char); 8] = [
    ('\u{2014}', '\u{2015}'), // EM DASH -> HORIZONTAL BAR
    ('\u{301C}', '\u{FF5E}'), // WAVE DASH -> FULLWIDTH TILDE
    ('\u{2016}', '\u{2225}'), // DOUBLE VERTICAL LINE -> PARALLEL TO
    ('\u{2212}', '\u{FF0D}'), // MINUS SIGN -> FULLWIDTH HYPHEN-MINUS
    ('\u{00A2}', '\u{FFE0}'), // CENT SIGN
    ('\u{00A3}', '\u{FFE1}'), // POUND SIGN
    ('\u{00A5}', '\u{FFE5}'), // YEN SIGN
    ('\u{00AC}', '\u{FFE2}'), // NOT SIGN
];

/// Map a single scalar into the Aozora convention.
pub fn forward_char(ch: char) -> char {
    AOZORA_CHAR_MAP
        .iter()
        .find(|&&(standard, _)| standard == ch)
        .map_or(ch, |&(_, aozora)| aozora)
}

/// Map a single scalar back from the Aozora convention.
pub fn backward_char(ch: char) -> char {
    AOZORA_CHAR_MAP
        .iter()
        .find(|&&(_, aozora)| aozora == ch)
        .map_or(ch, |&(standard, _)| standard)
}

fn substitute(text: &str, map: fn(char) -> char) -> Cow<'_, str> {
    if text.chars().all(|ch| map(ch) == ch) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(map).collect())
}

/// Replace standard characters with their Aozora counterparts.
pub fn normalize_forward(text: &str) -> Cow<'_, str> {
    substitute(text, forward_char)
}

/// Replace Aozora counterparts with the standard characters.
pub fn normalize_backward(text: &str) -> Cow<'_, str> {
    substitute(text, backward_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_forward() {
        let cases = [
            ("", ""),
            ("あ", "あ"),
            ("〜", "～"),
            ("‖", "∥"),
            ("∥", "∥"),
            ("¢", "￠"),
            ("\u{2014}x\u{00A5}", "\u{2015}x\u{FFE5}"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_forward(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_normalize_backward() {
        let cases = [
            ("", ""),
            ("あ", "あ"),
            ("～", "〜"),
            ("\u{301C}", "\u{301C}"),
            ("\u{FF5E}", "\u{301C}"),
            ("∥", "‖"),
            ("‖", "‖"),
            ("￠", "¢"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_backward(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_borrows_when_unchanged() {
        assert!(matches!(normalize_forward("青空文庫"), Cow::Borrowed(_)));
        assert!(matches!(normalize_backward("青空文庫"), Cow::Borrowed(_)));
        assert!(matches!(normalize_forward("〜"), Cow::Owned(_)));
    }

    #[test]
    fn test_inverse_on_domain() {
        for (standard, aozora) in AOZORA_CHAR_MAP {
            assert_eq!(forward_char(standard), aozora);
            assert_eq!(backward_char(forward_char(standard)), standard);
        }
    }

    #[test]
    fn test_identity_outside_domain() {
        let domain: Vec<char> = AOZORA_CHAR_MAP.iter().flat_map(|&(a, b)| [a, b]).collect();
        for ch in ('\u{0}'..='\u{FFFF}').filter(|ch| !domain.contains(ch)) {
            assert_eq!(forward_char(ch), ch);
            assert_eq!(backward_char(ch), ch);
        }
    }
}
