//! Scroll state machine
//!
//! Walks a viewport of `W` digits across each message in the catalog.
//! The offset is the message position under the leftmost digit. It starts
//! at `-(W - 1)` so the first letter enters from the right-hand digit, and
//! rolls over to the next message once the last letter has left the
//! leftmost digit.
//!
//! ```text
//! offset -3   [   a]
//! offset -2   [  ab]
//! offset -1   [ abc]
//! offset  0   [abc ]
//! offset  1   [bc  ]
//! offset  2   [c   ]
//! offset  3   rollover -> next message at offset -3
//! ```

use core::num::NonZeroU32;

use crate::catalog::{Catalog, Message};
use crate::config::VIEWPORT_WIDTH;

/// Starting offset for a `width`-digit viewport
pub const fn lead_in_offset(width: usize) -> i32 {
    1 - width as i32
}

/// Scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollState {
    /// Index of the message being shown
    pub message_index: usize,
    /// Message position under the leftmost digit
    pub offset: i32,
    /// Ticks since the last letter shift
    pub scroll_tick_counter: u32,
}

impl ScrollState {
    /// Initial state for a `width`-digit viewport
    pub const fn start(width: usize) -> Self {
        Self {
            message_index: 0,
            offset: lead_in_offset(width),
            scroll_tick_counter: 0,
        }
    }
}

/// Outcome of a scroll tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollEvent {
    /// Counter advanced, viewport did not move
    Held,
    /// Viewport moved one letter
    Shifted { offset: i32 },
    /// Viewport left the message; now at the start of `message_index`
    RolledOver { message_index: usize },
}

/// Scroll state machine over a catalog
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollMachine<'a, const W: usize = VIEWPORT_WIDTH> {
    catalog: Catalog<'a>,
    period: NonZeroU32,
    state: ScrollState,
}

impl<'a, const W: usize> ScrollMachine<'a, W> {
    /// Create a machine at the lead-in of the first message
    ///
    /// `period` is the number of ticks per letter shift.
    pub fn new(catalog: Catalog<'a>, period: NonZeroU32) -> Self {
        Self {
            catalog,
            period,
            state: ScrollState::start(W),
        }
    }

    /// Count one tick, shifting the viewport every `period` ticks
    pub fn tick(&mut self) -> ScrollEvent {
        self.state.scroll_tick_counter += 1;
        if self.state.scroll_tick_counter < self.period.get() {
            return ScrollEvent::Held;
        }

        self.state.scroll_tick_counter = 0;
        self.step()
    }

    /// Shift the viewport one letter now, rolling over past the last letter
    ///
    /// Does not touch the tick counter.
    pub fn step(&mut self) -> ScrollEvent {
        self.state.offset += 1;

        let len = i32::try_from(self.current_message().len()).unwrap_or(i32::MAX);
        if self.state.offset >= len {
            self.state.offset = lead_in_offset(W);
            self.state.message_index = self.catalog.next_index(self.state.message_index);
            ScrollEvent::RolledOver {
                message_index: self.state.message_index,
            }
        } else {
            ScrollEvent::Shifted {
                offset: self.state.offset,
            }
        }
    }

    pub fn current_offset(&self) -> i32 {
        self.state.offset
    }

    pub fn current_message(&self) -> Message<'a> {
        self.catalog.get(self.state.message_index)
    }

    pub fn message_index(&self) -> usize {
        self.state.message_index
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Letter shifts needed to traverse the current message, gaps included
    pub fn steps_per_message(&self) -> usize {
        self.current_message().len() + W - 1
    }
}
