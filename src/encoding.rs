// Text-to-pattern encoders.
//
// The client stores hostnames both as narrow strings (one byte per
// character) and as wide strings (UTF-16LE). Both encoders work per
// character and never fail; callers restrict input to printable ASCII.

use std::fmt;

/// Byte encoding a hostname may be stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per character (low 8 bits of the code point).
    SingleByte,
    /// Two bytes per character, low byte first.
    Utf16Le,
}

impl Encoding {
    /// Both encodings, in the order the engine applies them.
    pub const ALL: [Encoding; 2] = [Encoding::SingleByte, Encoding::Utf16Le];

    /// Encode `text` under this encoding.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::SingleByte => encode_single_byte(text),
            Self::Utf16Le => encode_utf16_le(text),
        }
    }

    /// Bytes produced per character.
    pub const fn width(self) -> usize {
        match self {
            Self::SingleByte => 1,
            Self::Utf16Le => 2,
        }
    }

    /// Short label used in logs and JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleByte => "ascii",
            Self::Utf16Le => "utf16le",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode each character as the low 8 bits of its code point.
pub fn encode_single_byte(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u32 as u8).collect()
}

/// Encode each character as a 16-bit little-endian unit (low 16 bits of its
/// code point).
pub fn encode_utf16_le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for c in text.chars() {
        let unit = c as u32 as u16;
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_matches_ascii() {
        assert_eq!(encode_single_byte("www.gadu-gadu.pl"), b"www.gadu-gadu.pl");
        assert!(encode_single_byte("").is_empty());
    }

    #[test]
    fn utf16_is_little_endian() {
        assert_eq!(encode_utf16_le("ab"), vec![b'a', 0, b'b', 0]);
        // U+0141 (Ł): low byte first.
        assert_eq!(encode_utf16_le("\u{141}"), vec![0x41, 0x01]);
    }

    #[test]
    fn single_byte_truncates_to_low_bits() {
        assert_eq!(encode_single_byte("\u{141}"), vec![0x41]);
    }

    #[test]
    fn lengths_follow_width() {
        for text in ["", "a", "retr.gadu-gadu.pl", "my.server.net"] {
            let n = text.chars().count();
            for enc in Encoding::ALL {
                assert_eq!(enc.encode(text).len(), n * enc.width(), "{enc} {text}");
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Encoding::SingleByte.to_string(), "ascii");
        assert_eq!(Encoding::Utf16Le.to_string(), "utf16le");
    }
}
