//! Digit multiplexer
//!
//! Time-division sharing of the segment bus: one digit is lit per tick and
//! the active digit walks round the display.

use crate::config::VIEWPORT_WIDTH;

/// Multiplexer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexState {
    /// Currently lit digit, always in `0..W`
    pub active_digit: usize,
}

/// Round-robin digit selector for a `W`-digit display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer<const W: usize = VIEWPORT_WIDTH> {
    state: MultiplexState,
}

impl<const W: usize> Default for Multiplexer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> Multiplexer<W> {
    /// Create a multiplexer with digit 0 active
    pub const fn new() -> Self {
        assert!(W > 0, "display needs at least one digit");
        Self {
            state: MultiplexState { active_digit: 0 },
        }
    }

    /// Move to the next digit and return its index
    pub fn advance(&mut self) -> usize {
        self.state.active_digit = (self.state.active_digit + 1) % W;
        self.state.active_digit
    }

    pub const fn active_digit(&self) -> usize {
        self.state.active_digit
    }

    pub const fn state(&self) -> MultiplexState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let mux: Multiplexer = Multiplexer::new();
        assert_eq!(mux.active_digit(), 0);
        assert_eq!(mux.state(), MultiplexState::default());
    }

    #[test]
    fn test_advance_wraps() {
        let mut mux: Multiplexer<4> = Multiplexer::new();
        let seq: Vec<usize> = (0..8).map(|_| mux.advance()).collect();
        assert_eq!(seq, [1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_full_cycle_visits_every_digit_once() {
        let mut mux: Multiplexer<4> = Multiplexer::new();
        // Bring the cycle round to digit 0 first
        for _ in 0..3 {
            mux.advance();
        }

        let cycle: Vec<usize> = (0..4).map(|_| mux.advance()).collect();
        assert_eq!(cycle, [0, 1, 2, 3]);
    }

    #[test]
    fn test_single_digit_display() {
        let mut mux: Multiplexer<1> = Multiplexer::new();
        assert_eq!(mux.advance(), 0);
        assert_eq!(mux.advance(), 0);
    }
}
