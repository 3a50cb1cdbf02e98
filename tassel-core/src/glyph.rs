//! Seven-segment glyphs
//!
//! A glyph is one byte, one bit per segment:
//!
//! ```text
//!      a
//!    ─────
//!   f│   │b
//!    ──g──
//!   e│   │c
//!    ─────  . dp
//!      d
//! ```
//!
//! Bit 0 is segment `a`, bit 6 is `g`, bit 7 is the decimal point.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment `a` (top)
pub const SEG_A: u8 = 1 << 0;
/// Segment `b` (top right)
pub const SEG_B: u8 = 1 << 1;
/// Segment `c` (bottom right)
pub const SEG_C: u8 = 1 << 2;
/// Segment `d` (bottom)
pub const SEG_D: u8 = 1 << 3;
/// Segment `e` (bottom left)
pub const SEG_E: u8 = 1 << 4;
/// Segment `f` (top left)
pub const SEG_F: u8 = 1 << 5;
/// Segment `g` (middle)
pub const SEG_G: u8 = 1 << 6;
/// Decimal point
pub const SEG_DP: u8 = 1 << 7;

/// Number of segment lines on the bus (7 segments + decimal point)
pub const SEGMENT_COUNT: usize = 8;

/// Longest text accepted by [`encode_text`] when authoring catalogs
pub const MAX_TEXT_LEN: usize = 64;

/// One pre-encoded segment bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Glyph(u8);

impl Glyph {
    /// All segments off
    pub const BLANK: Glyph = Glyph(0);

    /// Wrap a raw segment bitmask
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw segment bitmask
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Same glyph with the decimal point lit
    pub const fn with_dp(self) -> Self {
        Self(self.0 | SEG_DP)
    }

    pub const fn has_dp(self) -> bool {
        self.0 & SEG_DP != 0
    }

    /// Check whether a single segment line (0 = a .. 7 = dp) is lit
    pub const fn segment(self, line: usize) -> bool {
        line < SEGMENT_COUNT && self.0 & (1 << line) != 0
    }

    /// Look up the font glyph for a character
    ///
    /// Letters that only have one legible seven-segment form map both
    /// cases to it (`B` and `b` both give `b`). Letters with distinct
    /// upper and lower forms (`C`/`c`, `H`/`h`, `I`/`i`, `O`/`o`, `U`/`u`)
    /// keep their case. Returns `None` for characters the display cannot
    /// draw, such as `K`, `M`, `V`, `W` and `X`.
    pub const fn from_char(c: char) -> Option<Self> {
        let bits = match c {
            ' ' => 0,
            '0' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
            '1' => SEG_B | SEG_C,
            '2' | 'Z' | 'z' => SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
            '3' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
            '4' => SEG_B | SEG_C | SEG_F | SEG_G,
            '5' | 'S' | 's' => SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
            '6' => SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
            '7' => SEG_A | SEG_B | SEG_C,
            '8' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
            '9' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
            'A' | 'a' => SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
            'B' | 'b' => SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
            'C' => SEG_A | SEG_D | SEG_E | SEG_F,
            'c' => SEG_D | SEG_E | SEG_G,
            'D' | 'd' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,
            'E' | 'e' => SEG_A | SEG_D | SEG_E | SEG_F | SEG_G,
            'F' | 'f' => SEG_A | SEG_E | SEG_F | SEG_G,
            'G' | 'g' => SEG_A | SEG_C | SEG_D | SEG_E | SEG_F,
            'H' => SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
            'h' => SEG_C | SEG_E | SEG_F | SEG_G,
            'I' => SEG_E | SEG_F,
            'i' => SEG_E,
            'J' | 'j' => SEG_B | SEG_C | SEG_D | SEG_E,
            'L' | 'l' => SEG_D | SEG_E | SEG_F,
            'N' | 'n' => SEG_C | SEG_E | SEG_G,
            'O' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
            'o' => SEG_C | SEG_D | SEG_E | SEG_G,
            'P' | 'p' => SEG_A | SEG_B | SEG_E | SEG_F | SEG_G,
            'Q' | 'q' => SEG_A | SEG_B | SEG_C | SEG_F | SEG_G,
            'R' | 'r' => SEG_E | SEG_G,
            'T' | 't' => SEG_D | SEG_E | SEG_F | SEG_G,
            'U' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
            'u' => SEG_C | SEG_D | SEG_E,
            'Y' | 'y' => SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
            '-' => SEG_G,
            '_' => SEG_D,
            '=' => SEG_D | SEG_G,
            '\'' => SEG_F,
            '"' => SEG_B | SEG_F,
            '.' => SEG_DP,
            _ => return None,
        };
        Some(Self(bits))
    }
}

/// Errors from encoding text into glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// Character has no seven-segment form
    Unsupported(char),
    /// Encoded text does not fit in the output buffer
    TooLong,
}

/// Encode text into a glyph sequence
///
/// A `.` lights the decimal point of the glyph before it, so `"2.5"`
/// takes two digits. A leading `.` or a second `.` in a row gets its own
/// digit.
pub fn encode_text<const N: usize>(text: &str) -> Result<Vec<Glyph, N>, GlyphError> {
    let mut glyphs: Vec<Glyph, N> = Vec::new();

    for c in text.chars() {
        if c == '.' {
            if let Some(last) = glyphs.last_mut() {
                if !last.has_dp() {
                    *last = last.with_dp();
                    continue;
                }
            }
        }

        let glyph = Glyph::from_char(c).ok_or(GlyphError::Unsupported(c))?;
        glyphs.push(glyph).map_err(|_| GlyphError::TooLong)?;
    }

    Ok(glyphs)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[derive(Deserialize)]
    struct Entry {
        glyphs: std::vec::Vec<Glyph>,
    }

    #[test]
    fn test_glyphs_read_as_raw_bytes() {
        let entry: Entry = toml::from_str("glyphs = [0x39, 0x00, 0xBF]").unwrap();
        assert_eq!(
            entry.glyphs,
            [
                Glyph::from_char('C').unwrap(),
                Glyph::BLANK,
                Glyph::from_char('0').unwrap().with_dp(),
            ]
        );
    }

    #[test]
    fn test_glyph_byte_out_of_range() {
        assert!(toml::from_str::<Entry>("glyphs = [256]").is_err());
        assert!(toml::from_str::<Entry>("glyphs = [-1]").is_err());
    }
}
