//! UTF-8 <-> Mazovia code page transcoding.
//!
//! The printer firmware speaks Mazovia, a single-byte Polish code page.
//! Outbound text is transcoded UTF-8 -> Mazovia by [`to_mazovia`]; any
//! code point that is not ASCII and not one of the Polish diacritics
//! below is silently dropped, matching the source driver's behavior
//! (the firmware rejects unknown bytes anyway).
//!
//! Inbound bytes are raw Mazovia and are not touched by the protocol
//! engine. [`from_mazovia`] is exposed so callers that want to render
//! inbound text (e.g. a printed header echoed back) can do so.

/// Polish diacritic -> Mazovia byte, in source table order.
const TABLE: &[(char, u8)] = &[
    ('Ó', 0xA3),
    ('ó', 0xA2),
    ('Ą', 0x8F),
    ('Ć', 0x95),
    ('Ę', 0x90),
    ('ą', 0x86),
    ('ć', 0x8D),
    ('ę', 0x91),
    ('Ł', 0x9C),
    ('Ń', 0xA5),
    ('Ś', 0x98),
    ('Ź', 0xA0),
    ('Ż', 0xA1),
    ('ł', 0x92),
    ('ń', 0xA4),
    ('ś', 0x9E),
    ('ź', 0xA6),
    ('ż', 0xA7),
];

/// Transcodes a UTF-8 string to Mazovia bytes.
///
/// ASCII passes through unchanged. Characters in the Polish diacritic
/// table are mapped to their Mazovia byte. Any other non-ASCII code
/// point is dropped, not substituted.
pub fn to_mazovia(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
        } else if let Some(&(_, byte)) = TABLE.iter().find(|&&(c, _)| c == ch) {
            out.push(byte);
        }
        // else: silently dropped, per source toMazovia.
    }
    out
}

/// Transcodes Mazovia bytes back to a UTF-8 string.
///
/// Bytes below `0x80` pass through unchanged. Bytes that appear in the
/// diacritic table map back to their character. Any other byte `>=
/// 0x80` is rendered as `U+FFFD` (the driver never needs this path for
/// outbound traffic; it exists purely as a convenience for rendering
/// text the printer echoes back).
pub fn from_mazovia(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        if byte < 0x80 {
            out.push(byte as char);
        } else if let Some(&(ch, _)) = TABLE.iter().find(|&&(_, b)| b == byte) {
            out.push(ch);
        } else {
            out.push(char::REPLACEMENT_CHARACTER);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(to_mazovia("chleb"), b"chleb".to_vec());
    }

    #[test]
    fn maps_each_diacritic() {
        for &(ch, byte) in TABLE {
            assert_eq!(to_mazovia(&ch.to_string()), vec![byte], "char {ch:?}");
        }
    }

    #[test]
    fn n_acute_maps_to_a4() {
        // Regression test for the "ń" byte the source table singles out.
        assert_eq!(to_mazovia("ń"), vec![0xA4]);
    }

    #[test]
    fn unknown_code_point_is_dropped() {
        assert_eq!(to_mazovia("a\u{4E16}b"), b"ab".to_vec());
    }

    #[test]
    fn mixed_sentence_round_trips() {
        let sentence = "Zażółć gęślą jaźń";
        let encoded = to_mazovia(sentence);
        let decoded = from_mazovia(&encoded);
        assert_eq!(decoded, sentence);
    }

    #[test]
    fn from_mazovia_unmapped_high_byte_is_replacement_char() {
        assert_eq!(from_mazovia(&[0xFF]), "\u{FFFD}");
    }
}
