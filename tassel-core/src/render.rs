//! Frame renderer
//!
//! Maps a scroll position and a digit to the glyph that digit shows.
//! Positions outside the message render blank, which gives the lead-in and
//! lead-out gaps between messages.

use crate::catalog::Message;
use crate::glyph::Glyph;

/// Glyph for `digit` when the viewport's left edge is at `offset`
pub fn render(message: &Message<'_>, offset: i32, digit: usize) -> Glyph {
    i32::try_from(digit)
        .ok()
        .and_then(|digit| offset.checked_add(digit))
        .and_then(|index| message.get(index))
        .unwrap_or(Glyph::BLANK)
}

/// Every digit of a `W`-wide viewport at `offset`
pub fn render_frame<const W: usize>(message: &Message<'_>, offset: i32) -> [Glyph; W] {
    core::array::from_fn(|digit| render(message, offset, digit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A: Glyph = Glyph::from_bits(0x77);
    const B: Glyph = Glyph::from_bits(0x7C);
    const C: Glyph = Glyph::from_bits(0x39);
    const ABC: [Glyph; 3] = [A, B, C];
    const X: Glyph = Glyph::BLANK;

    #[test]
    fn test_abc_through_four_digit_viewport() {
        let msg = Message::new(&ABC).unwrap();

        let frames = [
            (-3, [X, X, X, A]),
            (-2, [X, X, A, B]),
            (-1, [X, A, B, C]),
            (0, [A, B, C, X]),
            (1, [B, C, X, X]),
            (2, [C, X, X, X]),
        ];

        for (offset, expected) in frames {
            assert_eq!(render_frame::<4>(&msg, offset), expected, "offset {offset}");
        }
    }

    #[test]
    fn test_extreme_offsets_are_blank() {
        let msg = Message::new(&ABC).unwrap();
        assert_eq!(render(&msg, i32::MIN, 0), Glyph::BLANK);
        assert_eq!(render(&msg, i32::MAX, 3), Glyph::BLANK);
        assert_eq!(render(&msg, 0, usize::MAX), Glyph::BLANK);
    }

    #[test]
    fn test_preserves_decimal_point() {
        let dotted = [A.with_dp()];
        let msg = Message::new(&dotted).unwrap();
        assert!(render(&msg, 0, 0).has_dp());
    }

    proptest! {
        #[test]
        fn prop_render_boundary(
            bits in proptest::collection::vec(1u8..=255, 1..32),
            offset in -40i32..40,
            digit in 0usize..4,
        ) {
            let glyphs: Vec<Glyph> = bits.iter().copied().map(Glyph::from_bits).collect();
            let msg = Message::new(&glyphs).unwrap();
            let index = offset + digit as i32;

            let glyph = render(&msg, offset, digit);
            if index < 0 || index >= glyphs.len() as i32 {
                prop_assert_eq!(glyph, Glyph::BLANK);
            } else {
                prop_assert_eq!(glyph, glyphs[index as usize]);
            }
        }
    }
}
