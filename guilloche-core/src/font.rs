//! Fixed 6x8 glyph table for the date window and dial label
//!
//! Classic 5x7 column bitmaps (LSB = top row) padded to a 6-pixel
//! advance. Only digits, uppercase letters and space exist - that is
//! the full character set the dial ever prints.

/// Width of one glyph cell in pixels
pub const GLYPH_WIDTH: usize = 6;

/// Height of one glyph cell in pixels
pub const GLYPH_HEIGHT: usize = 8;

const BLANK: [u8; 6] = [0x00; 6];

const DIGITS: [[u8; 6]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46, 0x00], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31, 0x00], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03, 0x00], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E, 0x00], // 9
];

const UPPER: [[u8; 6]; 26] = [
    [0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01, 0x00], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A, 0x00], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01, 0x00], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F, 0x00], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46, 0x00], // R
    [0x46, 0x49, 0x49, 0x49, 0x31, 0x00], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F, 0x00], // W
    [0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // X
    [0x07, 0x08, 0x70, 0x08, 0x07, 0x00], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43, 0x00], // Z
];

/// Column bitmap for a character; unknown characters render blank
pub fn glyph(ch: char) -> &'static [u8; 6] {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        'A'..='Z' => &UPPER[ch as usize - 'A' as usize],
        _ => &BLANK,
    }
}

/// Rendered width of a string in pixels
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_glyphs_nonblank() {
        for ch in "JANFEBMARAPRMAYJUNJULAUGSEPOCTNOVDEC0123456789".chars() {
            assert_ne!(glyph(ch), &BLANK, "glyph for {ch:?} is blank");
        }
    }

    #[test]
    fn test_unknown_renders_blank() {
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
        assert_eq!(glyph('a'), &BLANK);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("DEC"), 18);
        assert_eq!(text_width(""), 0);
    }
}
