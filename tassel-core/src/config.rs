//! Display configuration
//!
//! These values are fixed at build time. The firmware build script reads
//! them from `display.toml` through the `serde` derive below.

use core::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of physical digits, and so the width of the scrolling viewport
pub const VIEWPORT_WIDTH: usize = 4;

/// Reference tick period: 8-bit timer overflow at 20 MHz with a /128 prescaler
pub const DEFAULT_TICK_PERIOD_US: u32 = 1638;

/// Ticks per one-letter scroll step (~419 ms at the default tick period)
pub const DEFAULT_SCROLL_PERIOD_TICKS: NonZeroU32 = match NonZeroU32::new(256) {
    Some(period) => period,
    None => panic!("scroll period must be non-zero"),
};

/// Which logic level turns a digit on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Digit enabled when its line is driven low (common-cathode via low-side switch)
    #[default]
    ActiveLow,
    /// Digit enabled when its line is driven high
    ActiveHigh,
}

impl Polarity {
    /// Level that asserts a line with this polarity
    pub const fn asserted_high(self) -> bool {
        matches!(self, Polarity::ActiveHigh)
    }

    /// Pin level for a line that should be `asserted`
    pub const fn level(self, asserted: bool) -> bool {
        asserted == self.asserted_high()
    }
}

/// Refresh timing and wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Interval between refresh ticks in microseconds
    pub tick_period_us: u32,
    /// Refresh ticks per one-letter scroll step
    pub scroll_period_ticks: NonZeroU32,
    /// Digit-enable line polarity
    pub digit_polarity: Polarity,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            tick_period_us: DEFAULT_TICK_PERIOD_US,
            scroll_period_ticks: DEFAULT_SCROLL_PERIOD_TICKS,
            digit_polarity: Polarity::ActiveLow,
        }
    }

    /// Time between letter shifts in microseconds
    pub const fn scroll_period_us(&self) -> u64 {
        self.tick_period_us as u64 * self.scroll_period_ticks.get() as u64
    }

    /// How often each individual digit is refreshed, in Hz
    pub const fn digit_refresh_hz(&self, width: usize) -> u32 {
        let cycle_us = self.tick_period_us as u64 * width as u64;
        if cycle_us == 0 {
            0
        } else {
            (1_000_000 / cycle_us) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.tick_period_us, 1638);
        assert_eq!(config.scroll_period_ticks.get(), 256);
        assert_eq!(config.digit_polarity, Polarity::ActiveLow);
    }

    #[test]
    fn test_scroll_period_in_letter_shift_range() {
        // A letter shift should land somewhere around 300-700 ms
        let us = DisplayConfig::default().scroll_period_us();
        assert!((300_000..=700_000).contains(&us), "{us} us");
    }

    #[test]
    fn test_digit_refresh_rate() {
        let config = DisplayConfig::default();
        // 4 digits * 1.638 ms = 6.552 ms per cycle
        assert_eq!(config.digit_refresh_hz(VIEWPORT_WIDTH), 152);

        let stalled = DisplayConfig {
            tick_period_us: 0,
            ..config
        };
        assert_eq!(stalled.digit_refresh_hz(VIEWPORT_WIDTH), 0);
    }

    #[test]
    fn test_polarity_levels() {
        assert!(!Polarity::ActiveLow.level(true));
        assert!(Polarity::ActiveLow.level(false));
        assert!(Polarity::ActiveHigh.level(true));
        assert!(!Polarity::ActiveHigh.level(false));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: DisplayConfig = toml::from_str(
            "scroll_period_ticks = 64\n\
             digit_polarity = \"active_high\"\n",
        )
        .unwrap();

        assert_eq!(config.tick_period_us, DEFAULT_TICK_PERIOD_US);
        assert_eq!(config.scroll_period_ticks.get(), 64);
        assert_eq!(config.digit_polarity, Polarity::ActiveHigh);
    }

    #[test]
    fn test_zero_scroll_period_rejected() {
        assert!(toml::from_str::<DisplayConfig>("scroll_period_ticks = 0").is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<DisplayConfig>("refresh_hz = 150").is_err());
    }
}
