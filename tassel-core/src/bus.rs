//! GPIO display bus
//!
//! Drives one `embedded-hal` output pin per digit-enable line and one per
//! segment line. Segment lines are active-high; digit lines follow the
//! configured [`Polarity`].

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{Polarity, VIEWPORT_WIDTH};
use crate::glyph::{Glyph, SEGMENT_COUNT};
use crate::traits::DisplayBus;

/// Display bus over individual GPIO pins
///
/// Segment pins are ordered `a, b, c, d, e, f, g, dp`. Pin errors are
/// ignored; on-chip GPIO cannot fail.
pub struct GpioBus<P, const W: usize = VIEWPORT_WIDTH> {
    digits: [P; W],
    segments: [P; SEGMENT_COUNT],
    polarity: Polarity,
}

impl<P: OutputPin, const W: usize> GpioBus<P, W> {
    /// Wrap digit and segment pins
    ///
    /// Pins are not touched until the first bus call, so they should be
    /// created at their inactive level.
    pub fn new(digits: [P; W], segments: [P; SEGMENT_COUNT], polarity: Polarity) -> Self {
        Self {
            digits,
            segments,
            polarity,
        }
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Give the pins back
    pub fn release(self) -> ([P; W], [P; SEGMENT_COUNT]) {
        (self.digits, self.segments)
    }

    fn drive_digit(&mut self, digit: usize, asserted: bool) {
        let level = PinState::from(self.polarity.level(asserted));
        if let Some(pin) = self.digits.get_mut(digit) {
            let _ = pin.set_state(level);
        }
    }
}

impl<P: OutputPin, const W: usize> DisplayBus for GpioBus<P, W> {
    fn disable_digits(&mut self) {
        for digit in 0..W {
            self.drive_digit(digit, false);
        }
    }

    fn write_segments(&mut self, glyph: Glyph) {
        for (line, pin) in self.segments.iter_mut().enumerate() {
            let _ = pin.set_state(PinState::from(glyph.segment(line)));
        }
    }

    fn enable_digit(&mut self, digit: usize) {
        self.drive_digit(digit, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn segment_pins(glyph: Glyph) -> [PinMock; SEGMENT_COUNT] {
        core::array::from_fn(|line| {
            let state = if glyph.segment(line) { State::High } else { State::Low };
            PinMock::new(&[Transaction::set(state)])
        })
    }

    fn idle_pins<const N: usize>() -> [PinMock; N] {
        let none: [Transaction; 0] = [];
        core::array::from_fn(|_| PinMock::new(&none))
    }

    fn finish<const W: usize>(bus: GpioBus<PinMock, W>) {
        let (digits, segments) = bus.release();
        for mut pin in digits.into_iter().chain(segments) {
            pin.done();
        }
    }

    #[test]
    fn test_segments_follow_glyph_bits() {
        let glyph = Glyph::from_char('2').unwrap().with_dp();
        let mut bus: GpioBus<PinMock, 4> =
            GpioBus::new(idle_pins(), segment_pins(glyph), Polarity::ActiveLow);

        bus.write_segments(glyph);
        finish(bus);
    }

    #[test]
    fn test_active_low_digits() {
        // disable_digits then enable_digit(2)
        let digits: [PinMock; 4] = core::array::from_fn(|digit| {
            let mut expected = vec![Transaction::set(State::High)];
            if digit == 2 {
                expected.push(Transaction::set(State::Low));
            }
            PinMock::new(&expected)
        });
        let mut bus = GpioBus::new(digits, idle_pins(), Polarity::ActiveLow);

        bus.disable_digits();
        bus.enable_digit(2);
        finish(bus);
    }

    #[test]
    fn test_active_high_digits() {
        let digits: [PinMock; 4] = core::array::from_fn(|digit| {
            let mut expected = vec![Transaction::set(State::Low)];
            if digit == 0 {
                expected.push(Transaction::set(State::High));
            }
            PinMock::new(&expected)
        });
        let mut bus = GpioBus::new(digits, idle_pins(), Polarity::ActiveHigh);
        assert_eq!(bus.polarity(), Polarity::ActiveHigh);

        bus.disable_digits();
        bus.enable_digit(0);
        finish(bus);
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut bus: GpioBus<PinMock, 4> =
            GpioBus::new(idle_pins(), idle_pins(), Polarity::ActiveLow);

        bus.enable_digit(4);
        finish(bus);
    }

    #[test]
    fn test_blank_turns_everything_off() {
        let digits: [PinMock; 4] =
            core::array::from_fn(|_| PinMock::new(&[Transaction::set(State::High)]));
        let mut bus = GpioBus::new(digits, segment_pins(Glyph::BLANK), Polarity::ActiveLow);

        bus.blank();
        finish(bus);
    }
}
