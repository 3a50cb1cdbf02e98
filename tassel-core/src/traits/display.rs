//! Display bus trait for the multiplexed seven-segment display

use crate::glyph::Glyph;

/// Digit-enable and segment outputs of a multiplexed display
///
/// All digits share one segment bus, so only one digit may be enabled while
/// segments change. Callers drive a refresh as `disable_digits`,
/// `write_segments`, `enable_digit`, in that order.
pub trait DisplayBus {
    /// Deassert every digit-enable line
    fn disable_digits(&mut self);

    /// Drive the shared segment lines
    fn write_segments(&mut self, glyph: Glyph);

    /// Assert one digit-enable line
    ///
    /// Out-of-range digits are ignored.
    fn enable_digit(&mut self, digit: usize);

    /// Turn the whole display off
    fn blank(&mut self) {
        self.disable_digits();
        self.write_segments(Glyph::BLANK);
    }
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    fn disable_digits(&mut self) {
        (**self).disable_digits();
    }

    fn write_segments(&mut self, glyph: Glyph) {
        (**self).write_segments(glyph);
    }

    fn enable_digit(&mut self, digit: usize) {
        (**self).enable_digit(digit);
    }

    fn blank(&mut self) {
        (**self).blank();
    }
}
