//! # Code Page 437 Encoding
//!
//! Converts receipt text to CP437 single-byte encoding. The printer must be
//! switched to CP437 (`ESC GS t 1`) first, which codegen does on every job.
//! ASCII passes through unchanged; characters outside CP437 become `?`.

/// The upper half of CP437 (bytes 0x80–0xFF), sixteen characters per row.
const UPPER_HALF: [&str; 8] = [
    "ÇüéâäàåçêëèïîìÄÅ",
    "ÉæÆôöòûùÿÖÜ¢£¥₧ƒ",
    "áíóúñÑªº¿⌐¬½¼¡«»",
    "░▒▓│┤╡╢╖╕╣║╗╝╜╛┐",
    "└┴┬├─┼╞╟╚╔╩╦╠═╬╧",
    "╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀",
    "αßΓπΣσµτΦΘΩδ∞φε∩",
    "≡±≥≤⌠⌡÷≈°∙·√ⁿ²■\u{00A0}",
];

/// Encode a string as CP437 bytes.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            if ch.is_ascii() {
                ch as u8
            } else if let Some(byte) = to_cp437(ch) {
                byte
            } else {
                tracing::warn!(
                    "cp437: unmapped character '{}' (U+{:04X}), replacing with '?'",
                    ch,
                    ch as u32
                );
                b'?'
            }
        })
        .collect()
}

/// Map a non-ASCII character to its CP437 byte, if it has one.
fn to_cp437(ch: char) -> Option<u8> {
    UPPER_HALF
        .iter()
        .flat_map(|row| row.chars())
        .position(|c| c == ch)
        .map(|i| 0x80 + i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_are_complete() {
        for row in UPPER_HALF {
            assert_eq!(row.chars().count(), 16, "row {row:?}");
        }
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("TOTAL: $30.19"), b"TOTAL: $30.19");
        assert_eq!(encode(""), b"");
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(encode("Café"), vec![0x43, 0x61, 0x66, 0x82]);
        assert_eq!(encode("ñ"), vec![0xA4]);
        assert_eq!(encode("Ü"), vec![0x9A]);
    }

    #[test]
    fn test_rules_and_symbols() {
        assert_eq!(encode("═"), vec![0xCD]);
        assert_eq!(encode("─"), vec![0xC4]);
        assert_eq!(encode("°"), vec![0xF8]);
        assert_eq!(encode("\u{00A0}"), vec![0xFF]);
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        // Java Junction's coffee cup has no CP437 glyph
        assert_eq!(encode("☕ Thanks"), b"? Thanks");
    }
}
